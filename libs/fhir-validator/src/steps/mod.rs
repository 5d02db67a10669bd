//! Validation steps shared by every resource type.

pub mod structure;

use serde_json::Value;

/// An element counts as present when its key exists with a non-null value.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Renders a value for diagnostics: strings verbatim, anything else as JSON.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
