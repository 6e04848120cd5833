use cb_core::CaseRecord;

use log::warn;
use serde_json::Value;

/// Flatten a case-list response body into records
///
/// The API has shipped three list shapes over time: a bare array,
/// `{"data": [...]}`, and `{"data": {"data": [...]}}`. Anything else is
/// treated as an empty list. Individual records that fail to deserialize are
/// skipped rather than failing the whole load.
pub fn case_list(body: Value) -> Vec<CaseRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<CaseRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed case record: {e}");
                None
            }
        })
        .collect()
}
