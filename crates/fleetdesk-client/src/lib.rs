#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for request wrapper operations.
pub const TRACING_TARGET_HTTP: &str = "fleetdesk_client::http";

/// Tracing target for API facade operations.
pub const TRACING_TARGET_API: &str = "fleetdesk_client::api";

/// Tracing target for login, logout and refresh.
pub const TRACING_TARGET_AUTH: &str = "fleetdesk_client::auth";

/// Tracing target for token storage.
pub const TRACING_TARGET_STORE: &str = "fleetdesk_client::store";

mod api;
mod auth;
mod config;
mod error;
mod http;
mod store;

#[cfg(test)]
mod testing;

pub use fleetdesk_core::{Error, ErrorKind, Result};

pub use crate::api::FleetApi;
pub use crate::auth::{AuthService, LoginOutcome};
pub use crate::config::{ClientConfig, DEFAULT_API_URL};
pub use crate::http::{HttpClient, RequestOptions, normalize_path};
pub use crate::store::{FileTokenStore, MemoryTokenStore, TokenStore};
