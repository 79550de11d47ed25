//! Shared test utilities for the cspgen workspace.

use serde_json::Value;
use std::path::PathBuf;

pub const NONCE_PLACEHOLDER: &str = "__NONCE__";

const NONCE_PREFIX: &str = "'nonce-";

/// Replace the value of every `'nonce-...'` token in `text` with
/// [`NONCE_PLACEHOLDER`], so output with a generated nonce can be compared.
pub fn normalize_nonce(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(NONCE_PREFIX) {
        let value_start = start + NONCE_PREFIX.len();
        out.push_str(&rest[..value_start]);
        let tail = &rest[value_start..];
        match tail.find('\'') {
            Some(end) => {
                out.push_str(NONCE_PLACEHOLDER);
                rest = &tail[end..];
            }
            // Unterminated token: leave as is.
            None => {
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// [`normalize_nonce`] for a serialized generation result: masks the `nonce`
/// field and every string that carries a nonce token.
pub fn normalize_nonce_json(mut value: Value) -> Value {
    normalize_value(&mut value);
    value
}

fn normalize_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if key == "nonce" && v.is_string() {
                    *v = Value::String(NONCE_PLACEHOLDER.to_string());
                } else {
                    normalize_value(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_value),
        Value::String(s) if s.contains(NONCE_PREFIX) => *s = normalize_nonce(s),
        _ => {}
    }
}

/// `<repo>/tests/fixtures`.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Names of the fixture directories, sorted.
pub fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_dir())
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_every_nonce_token() {
        assert_eq!(
            normalize_nonce("script-src 'self' 'nonce-abc+/=='; style-src 'nonce-x'"),
            "script-src 'self' 'nonce-__NONCE__'; style-src 'nonce-__NONCE__'"
        );
    }

    #[test]
    fn leaves_other_text_alone() {
        let header = "script-src 'self' https://cdn.example.com";
        assert_eq!(normalize_nonce(header), header);
        assert_eq!(normalize_nonce("'nonce-unterminated"), "'nonce-unterminated");
    }

    #[test]
    fn masks_json_result() {
        let value = json!({
            "header": "script-src 'nonce-q1w2'",
            "directives": {"script-src": ["'self'", "'nonce-q1w2'"]},
            "nonce": "q1w2",
        });
        assert_eq!(
            normalize_nonce_json(value),
            json!({
                "header": "script-src 'nonce-__NONCE__'",
                "directives": {"script-src": ["'self'", "'nonce-__NONCE__'"]},
                "nonce": "__NONCE__",
            })
        );
    }

    #[test]
    fn null_nonce_stays_null() {
        let value = json!({"nonce": null});
        assert_eq!(normalize_nonce_json(value.clone()), value);
    }
}
