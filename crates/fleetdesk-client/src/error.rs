//! Error types for reqwest-based transport.

use thiserror::Error;

/// Failures raised below the API layer, before a response is classified.
#[derive(Debug, Error)]
pub(crate) enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<TransportError> for crate::Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Reqwest(e) => {
                if e.is_timeout() {
                    crate::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    crate::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else if e.is_builder() {
                    crate::Error::invalid_input()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_decode() {
                    crate::Error::serialization()
                        .with_message(e.to_string())
                        .with_source(e)
                } else {
                    crate::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            TransportError::Serde(e) => crate::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
        }
    }
}
