//! Canned responses and captured requests.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// A request as seen by the stub server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Upper-case HTTP method.
    pub method: String,
    /// Path component, without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Header pairs with lower-case names, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub(crate) fn new(
        method: &str,
        path: &str,
        query: Option<&str>,
        headers: &HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        let headers = headers
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_owned(), value.to_owned()))
            })
            .collect();

        Self {
            method: method.to_owned(),
            path: path.to_owned(),
            query: query.map(str::to_owned),
            headers,
            body,
        }
    }

    /// Returns the first value of the named header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns how many times the named header was sent.
    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .count()
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// A canned reply registered for one method and path.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: Option<String>,
    content_type: Option<&'static str>,
}

impl StubResponse {
    /// Replies with a JSON document.
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
            content_type: Some("application/json"),
        }
    }

    /// Replies with a plain-text body.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
            content_type: Some("text/plain"),
        }
    }

    /// Replies with no body at all.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: None,
            content_type: None,
        }
    }

    pub(crate) fn unmatched() -> Self {
        Self::json(404, serde_json::json!({ "detail": "Not found" }))
    }
}

impl IntoResponse for StubResponse {
    fn into_response(self) -> Response {
        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        let mut response = Response::new(body);
        *response.status_mut() =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        response
    }
}
