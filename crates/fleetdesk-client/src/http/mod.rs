//! Authenticated request wrapper.
//!
//! [`HttpClient`] resolves a path against the configured base URL, attaches
//! the stored bearer token when one exists and hands back the raw
//! [`reqwest::Response`]. Status handling and decoding live one layer up, in
//! [`FleetApi`](crate::FleetApi).

mod path;
mod request;

use std::sync::Arc;

use fleetdesk_core::types::TokenKind;
pub use path::normalize_path;
use path::is_absolute;
pub use request::RequestOptions;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use url::Url;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::store::{TokenStore, usable};
use crate::{Error, Result, TRACING_TARGET_HTTP};

/// Inner client that holds the HTTP client, base URL and token store.
struct HttpClientInner {
    http: Client,
    base_url: Url,
    store: Arc<dyn TokenStore>,
    config: ClientConfig,
}

impl std::fmt::Debug for HttpClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientInner")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// HTTP client that attaches the stored access token to every request.
///
/// Cloning is cheap; clones share the connection pool and the token store.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

impl HttpClient {
    /// Creates a client for the configured base URL backed by `store`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let base_url = config.base_url()?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            base_url = %base_url,
            timeout_secs = config.http_timeout,
            "Creating HTTP client"
        );

        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|err| {
            Error::configuration()
                .with_message("failed to build HTTP client")
                .with_source(err)
        })?;

        let inner = HttpClientInner {
            http,
            base_url,
            store,
            config,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Returns the validated base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the token store shared by this client.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// Resolves a request path into a full URL.
    ///
    /// Absolute `http(s)` URLs are used as-is. Relative paths are
    /// normalized with [`normalize_path`] and appended to the base URL.
    /// Query pairs, if any, are appended form-encoded.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the result is not a valid URL.
    pub fn resolve_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let normalized = normalize_path(path);
        let raw = if is_absolute(&normalized) {
            normalized
        } else {
            let base = self.inner.base_url.as_str().trim_end_matches('/');
            format!("{base}{normalized}")
        };

        let mut url = Url::parse(&raw).map_err(|err| {
            Error::invalid_input()
                .with_message(format!("invalid request URL `{raw}`"))
                .with_source(err)
        })?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        }

        Ok(url)
    }

    /// Sends one request and returns the raw response.
    ///
    /// Headers start with `Content-Type: application/json`, then
    /// `Authorization: Bearer <access>` when a token is stored, then the
    /// caller's headers, which replace defaults of the same name. A missing
    /// token is not an error; the request goes out unauthenticated.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns a network or timeout error if no response was received, or an
    /// invalid-input error for a malformed URL or header.
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Response> {
        let url = self.resolve_url(path, &options.query)?;
        let (headers, authenticated) = self.build_headers(&options).await?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            method = %options.method,
            url = %url,
            authenticated,
            "Sending request"
        );

        let mut request = self
            .inner
            .http
            .request(options.method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        match request.send().await {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_HTTP,
                    method = %options.method,
                    url = %url,
                    status = response.status().as_u16(),
                    "Received response"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_HTTP,
                    method = %options.method,
                    url = %url,
                    error = %err,
                    "Request failed"
                );
                Err(TransportError::from(err).into())
            }
        }
    }

    async fn build_headers(&self, options: &RequestOptions) -> Result<(HeaderMap, bool)> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut authenticated = false;
        if options.authenticated
            && let Some(token) = usable(self.inner.store.read(TokenKind::Access).await)
        {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|err| {
                Error::invalid_input()
                    .with_message("stored access token is not a valid header value")
                    .with_source(err)
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            authenticated = true;
        }

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                Error::invalid_input()
                    .with_message(format!("invalid header name `{name}`"))
                    .with_source(err)
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|err| {
                Error::invalid_input()
                    .with_message(format!("invalid value for header `{name}`"))
                    .with_source(err)
            })?;
            headers.insert(header_name, header_value);
        }

        Ok((headers, authenticated))
    }
}
