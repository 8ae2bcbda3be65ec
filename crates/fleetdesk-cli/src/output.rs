//! Terminal output: records to stdout, notifications to stderr.

use anyhow::Context as _;
use fleetdesk_core::notify::ToastQueue;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

/// Decodes a `--data` argument into a patch record.
///
/// The argument is either inline JSON or `@path` naming a JSON file.
pub async fn parse_data<T: DeserializeOwned>(data: &str) -> anyhow::Result<T> {
    let text = match data.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read `{path}`"))?,
        None => data.to_owned(),
    };

    serde_json::from_str(&text).context("invalid --data document")
}

/// Writes every pending notification to stderr, oldest first.
pub async fn flush_toasts(toasts: &ToastQueue) {
    for toast in toasts.drain().await {
        eprintln!("{}: {}", toast.severity, toast.message);
    }
}
