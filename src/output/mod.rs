mod cpp;
mod keywords;
mod rust;

use clap::ValueEnum;

use crate::core::error::Result;
use crate::core::EnumDescriptor;

/// Target language for generated declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Dialect {
    /// `#[repr(u32)]` enums with comparison and `TryFrom<u32>` impls
    #[default]
    Rust,
    /// `enum class` declarations backed by `uint32_t`
    Cpp,
}

impl Dialect {
    /// Render one enum. Enums without members render to an empty string.
    pub fn render(self, descriptor: &EnumDescriptor) -> Result<String> {
        match self {
            Dialect::Rust => rust::render(descriptor),
            Dialect::Cpp => Ok(cpp::render(descriptor)),
        }
    }

    /// Text placed at the top of a generated file
    pub fn preamble(self, banner: &str) -> String {
        match self {
            Dialect::Rust => format!(
                "#![allow(dead_code)]\n#![allow(non_camel_case_types)]\n#![allow(deprecated)]\n{}\n\n",
                banner
            ),
            Dialect::Cpp => format!("{}\n#pragma once\n\n#include <cstdint>\n\n", banner),
        }
    }
}

/// Doc-comment lines for a block of text, one per input line
fn doc_lines(text: &str, indent: &str) -> Vec<String> {
    text.trim()
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                format!("{}///", indent)
            } else {
                format!("{}/// {}", indent, line)
            }
        })
        .collect()
}

/// Double-quoted string literal valid in both target languages
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_lines() {
        let lines = doc_lines("  First line.\n\nSecond line.  \n", "    ");
        assert_eq!(
            lines,
            vec!["    /// First line.", "    ///", "    /// Second line."]
        );
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("say \"hi\"\nnow"), "\"say \\\"hi\\\"\\nnow\"");
        assert_eq!(quoted(r"C:\path"), "\"C:\\\\path\"");
    }

    #[test]
    fn test_preambles() {
        let rust = Dialect::Rust.preamble("// banner");
        assert!(rust.starts_with("#![allow(dead_code)]\n"));
        assert!(rust.contains("#![allow(non_camel_case_types)]"));
        assert!(rust.contains("#![allow(deprecated)]"));
        assert!(rust.contains("// banner"));

        let cpp = Dialect::Cpp.preamble("// banner");
        assert!(cpp.starts_with("// banner\n"));
        assert!(cpp.contains("#include <cstdint>"));
        assert!(!cpp.contains("#![allow"));
    }

    #[test]
    fn test_empty_enum_renders_nothing() {
        let descriptor = EnumDescriptor {
            name: "Empty".into(),
            summary: "Nothing here.".into(),
            ..Default::default()
        };
        assert_eq!(Dialect::Rust.render(&descriptor).unwrap(), "");
        assert_eq!(Dialect::Cpp.render(&descriptor).unwrap(), "");
    }
}
