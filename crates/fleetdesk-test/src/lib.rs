#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for stub server activity.
pub const TRACING_TARGET_STUB: &str = "fleetdesk_test::stub";

mod mock;

pub use mock::{RecordedRequest, StubResponse, StubServer};
