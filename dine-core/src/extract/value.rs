//! Lenient accessors for loosely typed JSON values.
//!
//! Upstream fields change their representation between API versions
//! (numbers as strings, flags as `0`/`1`, ...). None of these accessors
//! fail: a value that cannot be interpreted is treated as absent.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// First non-blank string among `keys`.
pub fn string(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        })
}

/// First string or number among `keys`, rendered as string.
pub fn string_or_number(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// A number, or a string that parses as a finite number.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// A non-negative integral amount.
pub fn amount(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    number(value)
        .filter(|n| *n >= 0.0 && *n <= u64::MAX as f64)
        .map(|n| n.round() as u64)
}

/// Interpret booleans, `1`/`0` and `"true"`/`"1"` as a flag.
pub fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64() == Some(1.0)),
        Value::String(s) => {
            let s = s.trim();
            Some(s == "1" || s.eq_ignore_ascii_case("true"))
        }
        _ => None,
    }
}

/// A list of labels; a single string counts as one label.
pub fn labels(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => vec![],
    }
}
