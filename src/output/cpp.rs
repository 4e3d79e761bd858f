use super::keywords::cpp_identifier;
use super::{doc_lines, quoted};
use crate::core::EnumDescriptor;

const INDENT: &str = "    ";

/// Render an enum as a C++ `enum class` with a `uint32_t` underlying type
pub fn render(descriptor: &EnumDescriptor) -> String {
    if descriptor.items.is_empty() {
        return String::new();
    }

    let mut output = String::new();

    if !descriptor.summary.is_empty() {
        push_lines(&mut output, doc_lines(&descriptor.summary, ""));
    }
    if let Some(description) = descriptor.extra_description() {
        push_lines(&mut output, doc_lines(description, ""));
    }
    if descriptor.is_deprecated() {
        output.push_str(&format!(
            "[[deprecated({})]]\n",
            quoted(&descriptor.deprecation_message)
        ));
    }

    output.push_str(&format!("enum class {} : uint32_t {{\n", descriptor.name));

    for item in &descriptor.items {
        if !item.summary.is_empty() {
            push_lines(&mut output, doc_lines(&item.summary, INDENT));
        }
        if item.is_deprecated() {
            output.push_str(&format!(
                "{}[[deprecated({})]]\n",
                INDENT,
                quoted(&item.deprecation_message)
            ));
        }
        output.push_str(&format!(
            "{}{} = {},\n",
            INDENT,
            cpp_identifier(&item.name),
            item.value
        ));
    }

    let body = output.trim_end();
    let mut output = body.strip_suffix(',').unwrap_or(body).to_string();
    output.push_str("\n};");

    output
}

fn push_lines(output: &mut String, lines: Vec<String>) {
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
}
