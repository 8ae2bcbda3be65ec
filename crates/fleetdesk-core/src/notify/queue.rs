//! Shared toast queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use super::toast::{DEFAULT_DURATION, Severity, Toast, ToastId};
use crate::TRACING_TARGET_NOTIFY;

struct ToastQueueInner {
    next_id: AtomicU64,
    toasts: RwLock<Vec<Toast>>,
}

/// Queue of toasts, dismissed automatically once their duration elapses.
///
/// Cloning the queue is cheap and every clone shares the same toasts.
/// Expiry is evaluated lazily against [`tokio::time::Instant`] whenever the
/// queue is read, so no background task is needed.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<ToastQueueInner>,
}

impl std::fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastQueue").finish_non_exhaustive()
    }
}

impl ToastQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let inner = ToastQueueInner {
            next_id: AtomicU64::new(1),
            toasts: RwLock::new(Vec::new()),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Enqueues a toast and returns its id.
    ///
    /// Without an explicit duration the toast stays for [`DEFAULT_DURATION`].
    pub async fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast {
            id,
            message: message.into(),
            severity,
            duration: duration.unwrap_or(DEFAULT_DURATION),
            shown_at: Instant::now(),
        };

        tracing::debug!(
            target: TRACING_TARGET_NOTIFY,
            %id,
            severity = %toast.severity,
            duration_ms = toast.duration.as_millis(),
            "Toast shown"
        );

        self.inner.toasts.write().await.push(toast);
        id
    }

    /// Shows a success toast for its default duration.
    pub async fn success(&self, message: impl Into<String>) -> ToastId {
        self.show_default(message, Severity::Success).await
    }

    /// Shows a success toast for the given duration.
    pub async fn success_for(&self, message: impl Into<String>, duration: Duration) -> ToastId {
        self.show(message, Severity::Success, Some(duration)).await
    }

    /// Shows an error toast for its default duration.
    pub async fn error(&self, message: impl Into<String>) -> ToastId {
        self.show_default(message, Severity::Error).await
    }

    /// Shows an error toast for the given duration.
    pub async fn error_for(&self, message: impl Into<String>, duration: Duration) -> ToastId {
        self.show(message, Severity::Error, Some(duration)).await
    }

    /// Shows a warning toast for its default duration.
    pub async fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show_default(message, Severity::Warning).await
    }

    /// Shows a warning toast for the given duration.
    pub async fn warning_for(&self, message: impl Into<String>, duration: Duration) -> ToastId {
        self.show(message, Severity::Warning, Some(duration)).await
    }

    /// Shows an info toast for its default duration.
    pub async fn info(&self, message: impl Into<String>) -> ToastId {
        self.show_default(message, Severity::Info).await
    }

    /// Shows an info toast for the given duration.
    pub async fn info_for(&self, message: impl Into<String>, duration: Duration) -> ToastId {
        self.show(message, Severity::Info, Some(duration)).await
    }

    async fn show_default(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.show(message, severity, Some(severity.default_duration()))
            .await
    }

    /// Removes a toast before it expires.
    ///
    /// Returns false if the toast was already gone.
    pub async fn dismiss(&self, id: ToastId) -> bool {
        let mut toasts = self.inner.toasts.write().await;
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        let removed = toasts.len() != before;

        if removed {
            tracing::debug!(target: TRACING_TARGET_NOTIFY, %id, "Toast dismissed");
        }

        removed
    }

    /// Returns the toasts that have not expired yet, oldest first.
    ///
    /// Expired toasts are dropped from the queue.
    pub async fn active(&self) -> Vec<Toast> {
        let mut toasts = self.inner.toasts.write().await;
        Self::prune(&mut toasts);
        toasts.clone()
    }

    /// Removes and returns every toast that has not expired yet.
    pub async fn drain(&self) -> Vec<Toast> {
        let mut toasts = self.inner.toasts.write().await;
        Self::prune(&mut toasts);
        std::mem::take(&mut *toasts)
    }

    /// Number of toasts that have not expired yet.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let toasts = self.inner.toasts.read().await;
        toasts.iter().filter(|toast| !toast.is_expired(now)).count()
    }

    /// Returns true if no toast is visible.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn prune(toasts: &mut Vec<Toast>) {
        let now = Instant::now();
        let before = toasts.len();
        toasts.retain(|toast| !toast.is_expired(now));

        let expired = before - toasts.len();
        if expired > 0 {
            tracing::trace!(target: TRACING_TARGET_NOTIFY, expired, "Toasts expired");
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}
