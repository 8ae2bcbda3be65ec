//! HTTP client configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the fleet-management API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ClientConfig {
    /// Base URL of the fleet-management API
    #[cfg_attr(
        feature = "config",
        arg(long = "api-url", env = "FLEET_API_URL", default_value = DEFAULT_API_URL)
    )]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP request timeout in seconds (requests never time out when unset)
    #[cfg_attr(
        feature = "config",
        arg(long = "http-timeout", env = "FLEET_HTTP_TIMEOUT")
    )]
    #[serde(default)]
    pub http_timeout: Option<u64>,

    /// User-Agent header to send with requests
    #[cfg_attr(
        feature = "config",
        arg(long = "http-user-agent", env = "FLEET_HTTP_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            http_timeout: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Parses and validates the base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL does not parse, is not
    /// `http`/`https`, or carries a query string or fragment.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.api_url.trim()).map_err(|err| {
            Error::configuration()
                .with_message(format!("invalid API base URL `{}`", self.api_url))
                .with_source(err)
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration().with_message(format!(
                "API base URL must use http or https, got `{}`",
                url.scheme()
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::configuration()
                .with_message("API base URL must not contain a query or fragment"));
        }

        Ok(url)
    }

    /// Returns the request timeout, if one is configured.
    ///
    /// A zero timeout is treated as unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.http_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Returns the effective user agent, using default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .filter(|agent| !agent.trim().is_empty())
            .unwrap_or_else(Self::default_user_agent)
    }

    fn default_user_agent() -> String {
        format!("fleetdesk/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http_timeout = Some(timeout_secs);
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert!(config.timeout().is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("https://fleet.example.com")
            .with_timeout(15)
            .with_user_agent("custom-agent/1.0");

        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.effective_user_agent(), "custom-agent/1.0");
    }

    #[test]
    fn test_zero_timeout_is_unset() {
        let config = ClientConfig::default().with_timeout(0);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_effective_user_agent_uses_default_when_none() {
        let config = ClientConfig::default();
        assert!(config.effective_user_agent().starts_with("fleetdesk/"));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ClientConfig::default().base_url().is_ok());

        let error = ClientConfig::new("not a url").base_url().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);

        let error = ClientConfig::new("ftp://fleet.example.com")
            .base_url()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);

        let error = ClientConfig::new("http://fleet.example.com/?x=1")
            .base_url()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
