//! XML-like AST tag serialization
//!
//! Node type becomes the tag name, a declaration's name becomes an attribute and
//! leaf text becomes the tag content.
//!
//! ```text
//! <stylesheet>
//!   <rule>
//!     <selector>.foo</selector>
//!     <declaration name="margin"><size unit="px">10</size></declaration>
//!   </rule>
//! </stylesheet>
//! ```

use crate::ast::{Declaration, Rule, Selector, Stylesheet, Value};

/// Serialize a stylesheet to the tag format, indenting nested tags with `indent`.
pub fn serialize_stylesheet(sheet: &Stylesheet, indent: &str) -> String {
    let mut result = String::new();
    if sheet.is_empty() {
        result.push_str("<stylesheet></stylesheet>");
        return result;
    }

    result.push_str("<stylesheet>\n");
    for rule in &sheet.rules {
        serialize_rule(rule, indent, &mut result);
    }
    result.push_str("</stylesheet>");
    result
}

fn serialize_rule(rule: &Rule, indent: &str, output: &mut String) {
    output.push_str(&format!("{}<rule>\n", indent));
    let inner = indent.repeat(2);

    for selector in &rule.selectors {
        output.push_str(&format!("{}{}\n", inner, selector_tag(selector)));
    }
    for declaration in &rule.declarations {
        output.push_str(&format!("{}{}\n", inner, declaration_tag(declaration)));
    }

    output.push_str(&format!("{}</rule>\n", indent));
}

fn selector_tag(selector: &Selector) -> String {
    match selector {
        Selector::Universal => "<selector>*</selector>".to_string(),
        Selector::Class(name) => format!("<selector>.{}</selector>", escape_xml(name)),
    }
}

fn declaration_tag(declaration: &Declaration) -> String {
    let value = match &declaration.value {
        Value::Size { magnitude, unit } => {
            format!("<size unit=\"{}\">{}</size>", unit.suffix(), magnitude)
        }
        Value::Keyword(text) => format!("<keyword>{}</keyword>", escape_xml(text)),
    };
    format!(
        "<declaration name=\"{}\">{}</declaration>",
        escape_xml(&declaration.name),
        value
    )
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
