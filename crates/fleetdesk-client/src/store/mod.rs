//! Storage for the access/refresh token pair.
//!
//! The [`TokenStore`] trait is the seam through which the request wrapper and
//! the auth flow reach the tokens. It is injected as an `Arc<dyn TokenStore>`,
//! so tests substitute a [`MemoryTokenStore`] while the CLI uses the durable
//! [`FileTokenStore`].
//!
//! Reads never fail: unavailable or unreadable storage reads as "no token".
//! Stored values come back exactly as written, empty strings included; only
//! [`TokenStore::is_authenticated`] and the `Authorization` header treat an
//! empty access token as absent.
//! Writes are last-writer-wins with no further coordination.

mod file;
mod memory;

pub use file::FileTokenStore;
use fleetdesk_core::types::{AuthTokens, TokenKind};
pub use memory::MemoryTokenStore;

use crate::Result;

/// Durable client-side storage of the two bearer tokens.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token of the given kind.
    ///
    /// Returns `None` if it was never written, was cleared, or the backing
    /// storage cannot be read.
    async fn read(&self, kind: TokenKind) -> Option<String>;

    /// Overwrites both tokens unconditionally.
    async fn write(&self, tokens: &AuthTokens) -> Result<()>;

    /// Removes both tokens. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;

    /// Returns true iff a non-empty access token is stored.
    ///
    /// Presence alone counts: neither signature nor expiry is checked.
    async fn is_authenticated(&self) -> bool {
        usable(self.read(TokenKind::Access).await).is_some()
    }

    /// Returns both tokens when both are stored.
    async fn tokens(&self) -> Option<AuthTokens> {
        let access = self.read(TokenKind::Access).await?;
        let refresh = self.read(TokenKind::Refresh).await?;
        Some(AuthTokens { access, refresh })
    }
}

/// Treats an empty token as absent where it would be sent or trusted.
pub(crate) fn usable(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.is_empty())
}
