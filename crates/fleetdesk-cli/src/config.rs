//! CLI configuration.
//!
//! ```text
//! Cli
//! ├── client: ClientConfig   # Base URL, timeout, user agent
//! ├── token_file             # Where the token pair is persisted
//! └── command: Command       # What to do
//! ```

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use fleetdesk_client::{ClientConfig, FileTokenStore, TokenStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::commands::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "fleetdesk")]
#[command(about = "Console for the fleet-management API")]
#[command(version)]
pub struct Cli {
    /// API client configuration.
    #[clap(flatten)]
    pub client: ClientConfig,

    /// File holding the access/refresh token pair
    #[arg(long = "token-file", env = "FLEET_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs go to stderr so that stdout carries only command output.
    pub fn init_tracing() -> anyhow::Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))?;

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
    }

    /// Opens the token store at the configured or default location.
    pub fn token_store(&self) -> anyhow::Result<Arc<dyn TokenStore>> {
        let store = match &self.token_file {
            Some(path) => FileTokenStore::new(path),
            None => FileTokenStore::at_default_path()?,
        };

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            path = %store.path().display(),
            "Using token file"
        );
        Ok(Arc::new(store))
    }

    /// Logs configuration at debug level (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            api_url = %self.client.api_url,
            http_timeout_secs = ?self.client.http_timeout,
            user_agent = %self.client.effective_user_agent(),
            "Client configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
