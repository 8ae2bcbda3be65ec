//! Status classification and body decoding.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TransportError;
use crate::{Error, Result};

/// Fields consulted, in order, for a server-provided error message.
const MESSAGE_FIELDS: [&str; 2] = ["detail", "message"];

/// Passes 2xx responses through and turns anything else into an error.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The body is best-effort; an unreadable one falls back to the default message.
    let body = response.bytes().await.unwrap_or_default();
    let error = Error::http_status(status.as_u16());
    Err(match error_message(&body) {
        Some(message) => error.with_message(message),
        None => error,
    })
}

/// Extracts `detail`, then `message`, from a JSON error body.
///
/// Empty and `null` fields are skipped. Non-string values use their JSON
/// rendering, so structured validation errors stay readable.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    let Value::Object(object) = serde_json::from_slice::<Value>(body).ok()? else {
        return None;
    };

    MESSAGE_FIELDS.iter().find_map(|field| match object.get(*field)? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    })
}

/// Decodes a success body into `T`.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(TransportError::from)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        Error::serialization()
            .with_message(format!("unexpected response body: {err}"))
            .with_source(err)
    })
}
