#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for notification queue operations.
pub const TRACING_TARGET_NOTIFY: &str = "fleetdesk_core::notify";

mod error;

pub mod notify;
pub mod prelude;
pub mod query;
pub mod types;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use types::AuthTokens;
