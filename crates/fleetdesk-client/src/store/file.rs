//! Token store persisted as a JSON document on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use fleetdesk_core::types::{AuthTokens, TokenKind};

use super::TokenStore;
use crate::{Error, Result, TRACING_TARGET_STORE};

/// On-disk layout: a flat object keyed by [`TokenKind::storage_key`].
type StoredTokens = BTreeMap<String, String>;

/// Token store backed by a single JSON file.
///
/// Tokens survive process restarts. A missing or corrupt file reads as an
/// empty store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting to the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default token file location.
    ///
    /// This is `fleetdesk/tokens.json` under the platform configuration
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fleetdesk").join("tokens.json"))
    }

    /// Creates a store at [`FileTokenStore::default_path`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the platform has no configuration
    /// directory.
    pub fn at_default_path() -> Result<Self> {
        Self::default_path().map(Self::new).ok_or_else(|| {
            Error::configuration().with_message("no configuration directory for the token file")
        })
    }

    /// Returns the file the tokens are persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Option<StoredTokens> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == IoErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_STORE,
                    path = %self.path.display(),
                    error = %err,
                    "Token file is unreadable"
                );
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_STORE,
                    path = %self.path.display(),
                    error = %err,
                    "Token file is corrupt, treating as empty"
                );
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn read(&self, kind: TokenKind) -> Option<String> {
        let stored = self.load().await?;
        stored.get(kind.storage_key()).cloned()
    }

    async fn write(&self, tokens: &AuthTokens) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let stored: StoredTokens = [TokenKind::Access, TokenKind::Refresh]
            .into_iter()
            .map(|kind| (kind.storage_key().to_owned(), tokens.get(kind).to_owned()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&stored)?;

        // Write beside the target and rename so readers never see a partial file.
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, &bytes).await?;
        restrict_permissions(&staging).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            path = %self.path.display(),
            "Persisted token pair"
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET_STORE,
                    path = %self.path.display(),
                    "Removed token file"
                );
                Ok(())
            }
            Err(err) if err.kind() == IoErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = std::fs::Permissions::from_mode(0o600);
    tokio::fs::set_permissions(path, permissions).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
