use std::collections::HashMap;

use super::keywords::rust_identifier;
use super::{doc_lines, quoted};
use crate::core::error::{DumpError, Result};
use crate::core::EnumDescriptor;

const INDENT: &str = "    ";

/// Render an enum as a `#[repr(u32)]` Rust enum plus comparison and
/// conversion impls against `u32`.
pub fn render(descriptor: &EnumDescriptor) -> Result<String> {
    if descriptor.items.is_empty() {
        return Ok(String::new());
    }

    let name = &descriptor.name;
    let variants: Vec<String> = descriptor
        .items
        .iter()
        .map(|item| rust_identifier(&item.name))
        .collect();

    check_unique_values(descriptor, &variants)?;

    let mut lines = Vec::new();

    if descriptor.is_deprecated() {
        lines.push(format!("#[deprecated = {}]", quoted(&descriptor.deprecation_message)));
    }
    if !descriptor.summary.is_empty() {
        lines.extend(doc_lines(&descriptor.summary, ""));
    }
    if let Some(description) = descriptor.extra_description() {
        lines.extend(doc_lines(description, ""));
    }

    lines.push("#[derive(Debug, Clone, Copy, PartialEq, Eq)]".to_string());
    lines.push("#[repr(u32)]".to_string());
    lines.push(format!("pub enum {} {{", name));

    for (item, variant) in descriptor.items.iter().zip(&variants) {
        if item.is_deprecated() {
            lines.push(format!(
                "{}#[deprecated = {}]",
                INDENT,
                quoted(item.deprecation_message.trim())
            ));
        }
        if !item.summary.is_empty() {
            lines.extend(doc_lines(&item.summary, INDENT));
        }
        lines.push(format!("{}{} = {},", INDENT, variant, item.value));
    }

    // last variant carries no trailing comma
    if let Some(last) = lines.last_mut() {
        last.pop();
    }
    lines.push("}".to_string());

    let mut output = lines.join("\n");

    output.push_str(&format!(
        "\n\nimpl PartialEq<u32> for {name} {{\n    fn eq(&self, other: &u32) -> bool {{\n        *self as u32 == *other\n    }}\n}}"
    ));
    output.push_str(&format!(
        "\n\nimpl PartialEq<{name}> for u32 {{\n    fn eq(&self, other: &{name}) -> bool {{\n        *self == *other as u32\n    }}\n}}"
    ));

    let arms: String = descriptor
        .items
        .iter()
        .zip(&variants)
        .map(|(item, variant)| format!("            {} => Ok(Self::{}),\n", item.value, variant))
        .collect();

    output.push_str(&format!(
        "\n\nimpl TryFrom<u32> for {name} {{\n    type Error = &'static str;\n\n    fn try_from(value: u32) -> Result<Self, Self::Error> {{\n        match value {{\n{arms}            _ => Err(\"Invalid value\"),\n        }}\n    }}\n}}"
    ));

    Ok(output)
}

/// A repeated value would make both the discriminant and the match arm invalid
fn check_unique_values(descriptor: &EnumDescriptor, variants: &[String]) -> Result<()> {
    let mut seen: HashMap<u32, &str> = HashMap::new();

    for (item, variant) in descriptor.items.iter().zip(variants) {
        if let Some(first) = seen.insert(item.value, variant) {
            return Err(DumpError::DuplicateValue {
                enum_name: descriptor.name.clone(),
                value: item.value,
                first: first.to_string(),
                second: variant.clone(),
            });
        }
    }

    Ok(())
}
