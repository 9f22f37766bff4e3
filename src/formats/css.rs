//! Canonical CSS text
//!
//! The output parses back to the same AST as long as keywords contain no
//! reserved punctuation besides `#`: `Size` renders as its magnitude followed by
//! the unit suffix, selectors as `*` or `.name`, and declarations always end in
//! `;`.

use crate::ast::{Declaration, Rule, Selector, Stylesheet, Value};
use std::fmt;

const DEFAULT_INDENT: &str = "  ";

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Size { magnitude, unit } => write!(f, "{}{}", magnitude, unit.suffix()),
            Value::Keyword(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Universal => f.write_str("*"),
            Selector::Class(name) => write!(f, ".{}", name),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_rule(self, DEFAULT_INDENT, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_css(self, DEFAULT_INDENT))
    }
}

/// Render a stylesheet, indenting declarations with `indent`.
pub fn to_css(sheet: &Stylesheet, indent: &str) -> String {
    let mut out = String::new();
    for (i, rule) in sheet.rules.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        write_rule(rule, indent, &mut out);
    }
    if !sheet.is_empty() {
        out.push('\n');
    }
    out
}

fn write_rule(rule: &Rule, indent: &str, out: &mut String) {
    let selectors = rule
        .selectors
        .iter()
        .map(Selector::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&selectors);

    if rule.declarations.is_empty() {
        out.push_str(" {}");
        return;
    }

    out.push_str(" {\n");
    for declaration in &rule.declarations {
        out.push_str(indent);
        out.push_str(&declaration.to_string());
        out.push('\n');
    }
    out.push('}');
}
