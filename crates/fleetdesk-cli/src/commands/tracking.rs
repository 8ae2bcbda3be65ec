//! `tracking` subcommands.

use std::time::Duration;

use clap::Subcommand;
use tokio::time::{MissedTickBehavior, interval};

use super::Context;
use crate::TRACING_TARGET_COMMAND;
use crate::output::{flush_toasts, print_json};

#[derive(Debug, Clone, Subcommand)]
pub enum TrackingCommand {
    /// Show the latest position of every driver
    Latest,
    /// Show the latest position of one driver
    Driver { driver_id: String },
    /// Poll live positions until interrupted
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
        /// Stop after this many polls
        #[arg(long)]
        count: Option<u64>,
    },
}

impl TrackingCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::Latest => print_json(&ctx.api.live_tracking().await?),
            Self::Driver { driver_id } => print_json(&ctx.api.driver_location(&driver_id).await?),
            Self::Watch { interval, count } => watch(ctx, Duration::from_secs(interval), count).await,
        }
    }
}

/// Polls live tracking on a fixed period.
///
/// A failed poll is reported and polling continues.
async fn watch(ctx: &Context, period: Duration, count: Option<u64>) -> anyhow::Result<()> {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!(target: TRACING_TARGET_COMMAND, polls, "Watch interrupted");
                return Ok(());
            }
        }

        match ctx.api.live_tracking().await {
            Ok(positions) => {
                let online = positions.iter().filter(|p| p.is_online()).count();
                print_json(&positions)?;
                ctx.toasts
                    .info(format!("{online}/{} drivers online", positions.len()))
                    .await;
            }
            Err(err) => {
                ctx.toasts
                    .warning(format!("Failed to refresh live tracking: {err}"))
                    .await;
            }
        }
        flush_toasts(&ctx.toasts).await;

        polls += 1;
        if count.is_some_and(|limit| polls >= limit) {
            return Ok(());
        }
    }
}
