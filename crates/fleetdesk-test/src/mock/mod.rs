//! In-process HTTP stub standing in for the fleet-management API.

mod record;
mod server;

pub use record::{RecordedRequest, StubResponse};
pub use server::StubServer;
