use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One output row handed back to the host
///
/// Wraps the JSON payload the host exposes as the record's `json` field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExecutionRecord {
    /// The record payload
    pub json: Value,
}

impl ExecutionRecord {
    /// Create a record from a JSON value
    #[inline]
    pub fn new(json: Value) -> Self {
        Self { json }
    }

    /// Get the payload
    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.json
    }

    /// Take ownership of the payload
    #[inline]
    pub fn into_value(self) -> Value {
        self.json
    }

    /// Try to view the payload as an object
    #[inline]
    pub fn as_object(&self) -> Option<&serde_json::Map<String, Value>> {
        self.json.as_object()
    }
}

impl From<Value> for ExecutionRecord {
    fn from(json: Value) -> Self {
        Self::new(json)
    }
}

/// Name of a JSON value's kind, as shown in validation messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_under_json_key() {
        let record = ExecutionRecord::new(json!({"a": 1}));
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"json": {"a": 1}}));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
