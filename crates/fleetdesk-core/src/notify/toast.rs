//! A single toast notification.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use tokio::time::Instant;

/// Display duration used when none is given and no severity default applies.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(6);

/// Identifier of a toast, unique within its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub(crate) u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// How long a toast of this severity stays visible by default.
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_secs(4),
            Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(6),
        }
    }
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Toast {
    /// Instant at which the toast is dismissed automatically.
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.duration
    }

    /// Returns true once the toast's duration has elapsed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }

    /// Time left before auto-dismiss, zero once expired.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at().saturating_duration_since(now)
    }
}
