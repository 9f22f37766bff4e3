//! Treeviz formatter for stylesheets

use crate::ast::{Rule, Stylesheet};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(sheet: &Stylesheet) -> String {
    let mut result = String::new();
    for (i, rule) in sheet.rules.iter().enumerate() {
        let is_last = i == sheet.rules.len() - 1;
        append_rule(&mut result, rule, is_last);
    }
    result
}

fn append_rule(result: &mut String, rule: &Rule, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = rule
        .selectors
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    result.push_str(&format!("{} rule: {}\n", connector, truncate(&label, 30)));

    let prefix = if is_last { "  " } else { "│ " };
    let children: Vec<(&str, String)> = rule
        .selectors
        .iter()
        .map(|s| ("selector", s.to_string()))
        .chain(rule.declarations.iter().map(|d| {
            let text = d.to_string();
            ("declaration", text.trim_end_matches(';').to_string())
        }))
        .collect();

    for (i, (node_type, text)) in children.iter().enumerate() {
        let connector = if i == children.len() - 1 { "└─" } else { "├─" };
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node_type,
            truncate(text, 30)
        ));
    }
}
