//! Toast notifications with timed auto-dismiss.
//!
//! A [`ToastQueue`] is an explicit, cloneable handle rather than ambient
//! global state: every component that wants to report an outcome gets the
//! queue injected, and tests can inspect it directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleetdesk_core::notify::ToastQueue;
//!
//! let toasts = ToastQueue::new();
//! toasts.success("Vehicle created").await;
//! toasts.error("Failed to load drivers").await;
//!
//! for toast in toasts.active().await {
//!     println!("{}: {}", toast.severity, toast.message);
//! }
//! ```

mod queue;
mod toast;

pub use queue::ToastQueue;
pub use toast::{DEFAULT_DURATION, Severity, Toast, ToastId};
