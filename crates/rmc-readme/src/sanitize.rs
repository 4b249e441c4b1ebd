//! Model output sanitization.
//!
//! Strips an optional fenced-code wrapper and parses the rest as JSON.
//! Never fails: unparseable output becomes [`GeneratedFields::default`] and
//! the raw text goes to the `rmc_readme::sanitize` log target.

use rmc_core::GeneratedFields;
use serde_json::Value;

/// Parse raw model text into generated fields.
#[must_use]
pub fn sanitize(raw: &str) -> GeneratedFields {
    let text = strip_fences(raw);
    match serde_json::from_str::<Value>(text) {
        Ok(value) => fields_from_value(value),
        Err(error) => {
            tracing::warn!(
                target: "rmc_readme::sanitize",
                %error,
                raw,
                "failed to parse generated JSON"
            );
            GeneratedFields::default()
        }
    }
}

/// Remove a leading ```` ```lang ```` line and a trailing ```` ``` ````.
fn strip_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_lowercase());
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Wrong-typed fields are dropped one by one instead of discarding the record.
fn fields_from_value(value: Value) -> GeneratedFields {
    let Value::Object(mut map) = value else {
        tracing::warn!(target: "rmc_readme::sanitize", "generated JSON is not an object");
        return GeneratedFields::default();
    };

    GeneratedFields {
        description: match map.remove("description") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        features: string_list(map.remove("features")),
        usage: string_list(map.remove("usage")),
    }
}

fn string_list(value: Option<Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items.into_iter().filter_map(list_item).collect()
}

/// Falsy entries (`""`, `0`, `false`, `null`) are dropped.
fn list_item(item: Value) -> Option<String> {
    match item {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
