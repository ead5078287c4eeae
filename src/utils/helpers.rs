use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Mirrors how the page treats a JSON value in a boolean position:
/// `null`, `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a truthy value, as the page would interpolate it into a string.
pub fn truthy_text(value: Value) -> Option<String> {
    if !is_truthy(&value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s),
        other => Some(coerce_to_string(&other)),
    }
}

/// String coercion of a JSON value: arrays join their items with `,` (with
/// `null` items empty) and objects become `[object Object]`.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// serde adapter for optional response fields: absent and falsy both become `None`.
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(truthy_text))
}
