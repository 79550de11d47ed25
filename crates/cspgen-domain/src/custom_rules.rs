//! Schema checks for caller-supplied custom rules.
//!
//! Malformed entries are dropped individually with a warning; the rest are kept.

use cspgen_types::{Directive, DirectiveMap};
use std::collections::BTreeMap;

pub fn sanitize_custom_rules(raw: &BTreeMap<String, Vec<String>>) -> (DirectiveMap, Vec<String>) {
    let mut rules = DirectiveMap::new();
    let mut warnings = Vec::new();

    for (key, values) in raw {
        let Some(directive) = Directive::parse(key.trim()) else {
            warnings.push(format!("Ignoring custom rule for unknown directive '{key}'"));
            continue;
        };

        let mut accepted: Vec<&str> = Vec::with_capacity(values.len());
        for value in values {
            let trimmed = value.trim();
            match malformed_reason(trimmed) {
                Some(reason) => warnings.push(format!(
                    "Ignoring malformed {directive} source '{value}': {reason}"
                )),
                None => accepted.push(trimmed),
            }
        }
        rules.extend_unique(directive, accepted);
    }

    (rules, warnings)
}

fn malformed_reason(source: &str) -> Option<&'static str> {
    if source.is_empty() {
        Some("empty source")
    } else if source.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if source.contains(';') || source.contains(',') {
        Some("contains a directive separator")
    } else {
        None
    }
}
