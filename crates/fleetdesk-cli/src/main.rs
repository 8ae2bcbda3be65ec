#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod output;

use std::process;

use anyhow::Context as _;
use fleetdesk_core::notify::ToastQueue;

use crate::commands::Context;
use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "fleetdesk_cli::startup";
pub const TRACING_TARGET_CONFIG: &str = "fleetdesk_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "fleetdesk_cli::command";

#[tokio::main]
async fn main() {
    let cli = Cli::init();

    if let Err(error) = Cli::init_tracing() {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
    cli.log();

    let toasts = ToastQueue::new();
    let result = run(cli, &toasts).await;

    if let Err(error) = &result {
        tracing::debug!(
            target: TRACING_TARGET_COMMAND,
            error = ?error,
            "command terminated with error"
        );
        toasts.error(format!("{error:#}")).await;
    }

    output::flush_toasts(&toasts).await;
    process::exit(if result.is_ok() { 0 } else { 1 });
}

/// Builds the client stack and runs the selected command.
async fn run(cli: Cli, toasts: &ToastQueue) -> anyhow::Result<()> {
    let store = cli.token_store().context("failed to open token store")?;
    let ctx = Context::new(cli.client.clone(), store, toasts.clone())
        .context("invalid client configuration")?;

    cli.command.execute(&ctx).await
}
