//! Process-local token store.

use fleetdesk_core::types::{AuthTokens, TokenKind};
use tokio::sync::RwLock;

use super::TokenStore;
use crate::{Result, TRACING_TARGET_STORE};

/// Token store that keeps the pair in memory for the lifetime of the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<AuthTokens>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds the given tokens.
    pub fn with_tokens(tokens: AuthTokens) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn read(&self, kind: TokenKind) -> Option<String> {
        let tokens = self.tokens.read().await;
        tokens.as_ref().map(|pair| pair.get(kind).to_owned())
    }

    async fn write(&self, tokens: &AuthTokens) -> Result<()> {
        *self.tokens.write().await = Some(tokens.clone());
        tracing::debug!(target: TRACING_TARGET_STORE, "Stored token pair in memory");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.tokens.write().await = None;
        tracing::debug!(target: TRACING_TARGET_STORE, "Cleared in-memory token pair");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let store = MemoryTokenStore::new();
        store.write(&AuthTokens::new("A1", "R1")).await.unwrap();

        assert_eq!(store.read(TokenKind::Access).await.as_deref(), Some("A1"));
        assert_eq!(store.read(TokenKind::Refresh).await.as_deref(), Some("R1"));
        assert!(store.is_authenticated().await);
        assert_eq!(store.tokens().await, Some(AuthTokens::new("A1", "R1")));
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_pair() {
        let store = MemoryTokenStore::with_tokens(AuthTokens::new("old", "old-r"));
        store.write(&AuthTokens::new("new", "new-r")).await.unwrap();
        assert_eq!(store.read(TokenKind::Access).await.as_deref(), Some("new"));
        assert_eq!(store.read(TokenKind::Refresh).await.as_deref(), Some("new-r"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryTokenStore::with_tokens(AuthTokens::new("A1", "R1"));
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(!store.is_authenticated().await);
        assert!(store.read(TokenKind::Refresh).await.is_none());
        assert!(store.tokens().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_access_token_is_not_authenticated() {
        let store = MemoryTokenStore::with_tokens(AuthTokens::new("", "R1"));
        assert!(!store.is_authenticated().await);
        assert_eq!(store.read(TokenKind::Access).await.as_deref(), Some(""));
        assert_eq!(store.read(TokenKind::Refresh).await.as_deref(), Some("R1"));
    }
}
