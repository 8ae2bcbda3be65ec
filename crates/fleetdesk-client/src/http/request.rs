//! Per-request options for [`HttpClient::send`].
//!
//! [`HttpClient::send`]: crate::HttpClient::send

use reqwest::Method;
use serde::Serialize;

use crate::Result;
use crate::error::TransportError;

/// Method, body, headers and query parameters of one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Raw request body, typically JSON.
    pub body: Option<Vec<u8>>,
    /// Extra headers applied after the defaults; they win on conflict.
    pub headers: Vec<(String, String)>,
    /// Query pairs appended to the resolved URL.
    pub query: Vec<(String, String)>,
    /// Whether the stored access token is attached.
    pub authenticated: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Creates options for the given method with no body.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
            authenticated: true,
        }
    }

    /// A `GET` request.
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// A `POST` request.
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// A `PATCH` request.
    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    /// A `DELETE` request.
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `body` cannot be encoded.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(TransportError::from)?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Sets a raw request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header that overrides any default of the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends one query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends several query pairs.
    #[must_use]
    pub fn with_query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sends the request without an `Authorization` header.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.authenticated = false;
        self
    }
}
