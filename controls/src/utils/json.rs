//! JSON value helpers
//!
//! Raw widget values arrive as `serde_json::Value`: strings, numbers,
//! arrays, or whole input-event payloads, depending on the widget.

use serde_json::Value as JsonValue;

/// Render a scalar JSON value the way a widget submits it as text.
///
/// Strings pass through without JSON quoting; numbers and booleans render
/// with their display form. Arrays, objects, and null return `None`.
pub fn scalar_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract the text of a raw input-event payload (`{ "target": { "value" } }`)
///
/// Text widgets submit the whole event object when the value was never
/// committed through the change handler.
pub fn event_input_value(value: &JsonValue) -> Option<&str> {
    value.get("target")?.get("value")?.as_str()
}

/// Truthiness of a JSON value as the dashboard UI evaluates it:
/// `false`, `0`, `""`, and `null` are false, everything else is true.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
