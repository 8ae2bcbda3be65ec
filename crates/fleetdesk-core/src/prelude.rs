//! Convenient re-exports for common use.

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::notify::{Severity, Toast, ToastId, ToastQueue};
pub use crate::types::*;
