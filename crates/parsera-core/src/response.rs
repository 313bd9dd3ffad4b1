use serde_json::Value;
use tracing::debug;

use crate::types::ExecutionRecord;

/// Unwrap the `{data: T[] | T}` envelope into output records.
///
/// An array yields one record per element and an object yields one record.
/// Anything else (no `data`, a scalar or null `data`, a non-object envelope)
/// is a valid "no rows" outcome and returns `items` unchanged.
pub fn unpack_response_data(envelope: Value, items: Vec<ExecutionRecord>) -> Vec<ExecutionRecord> {
    let data = match envelope {
        Value::Object(mut envelope) => envelope.remove("data"),
        _ => None,
    };

    match data {
        Some(Value::Array(rows)) => rows.into_iter().map(ExecutionRecord::new).collect(),
        Some(row @ Value::Object(_)) => vec![ExecutionRecord::new(row)],
        _ => {
            debug!("Response envelope has no usable data; passing input items through");
            items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fallback() -> Vec<ExecutionRecord> {
        vec![ExecutionRecord::new(json!({"input": true}))]
    }

    #[test]
    fn test_array_data_becomes_records() {
        let records = unpack_response_data(json!({"data": [{"a": 1}, {"a": 2}]}), fallback());
        assert_eq!(
            records,
            vec![ExecutionRecord::new(json!({"a": 1})), ExecutionRecord::new(json!({"a": 2}))]
        );
    }

    #[test]
    fn test_object_data_becomes_one_record() {
        let records = unpack_response_data(json!({"data": {"a": 1}, "credits": 3}), fallback());
        assert_eq!(records, vec![ExecutionRecord::new(json!({"a": 1}))]);
    }

    #[test]
    fn test_empty_array_yields_no_records() {
        assert!(unpack_response_data(json!({"data": []}), fallback()).is_empty());
    }

    #[test]
    fn test_fallback_cases() {
        for envelope in [
            json!({}),
            json!({"data": null}),
            json!({"data": "done"}),
            json!({"data": 3}),
            json!("plain text"),
            json!(null),
        ] {
            assert_eq!(unpack_response_data(envelope.clone(), fallback()), fallback(), "{}", envelope);
        }
    }
}
