use serde_json::{Map, Value};

/// Schema for pass-through providers that answer with a JSON object.
///
/// The object itself is opaque. What matters is whether it carries data:
/// an empty object, `null` or an empty body all mean "nothing there".
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectPayload {
    /// A JSON object with at least one key.
    Object(Map<String, Value>),
    /// Empty object, `null`, empty array or empty string.
    Empty,
    /// Any other JSON value (scalar or non-empty array).
    Unrecognized(Value),
}

impl From<Value> for ObjectPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) if map.is_empty() => Self::Empty,
            Value::Object(map) => Self::Object(map),
            Value::Null => Self::Empty,
            Value::Array(items) if items.is_empty() => Self::Empty,
            Value::String(text) if text.is_empty() => Self::Empty,
            other => Self::Unrecognized(other),
        }
    }
}
