//! Query-string construction from filter records.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Flattens a filter record into `(name, value)` query pairs.
///
/// The record must serialize to a JSON object (or to `null`, which yields no
/// pairs). `null` fields are skipped, strings are used verbatim and other
/// scalars use their JSON rendering. Nested values are rejected.
pub fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let object = match serde_json::to_value(params)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(object) => object,
        other => {
            return Err(Error::invalid_input()
                .with_message(format!("query parameters must be a record, got {other}")));
        }
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (name, value) in object {
        let value = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::invalid_input()
                    .with_message(format!("query parameter `{name}` must be a scalar")));
            }
        };
        pairs.push((name, value));
    }

    Ok(pairs)
}
