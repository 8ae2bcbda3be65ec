//! `drivers` subcommands.

use clap::Subcommand;
use fleetdesk_core::types::{DriverFilter, VehicleType};

use super::Context;
use crate::output::print_json;

#[derive(Debug, Clone, Subcommand)]
pub enum DriverCommand {
    /// List drivers
    List {
        /// Only drivers with this status
        #[arg(long)]
        status: Option<String>,
        /// Only drivers of this vehicle type
        #[arg(long)]
        vehicle_type: Option<VehicleType>,
    },
    /// Show one driver
    Get { id: String },
    /// Set availability and duty flags
    SetStatus {
        id: String,
        /// Whether the driver accepts deliveries
        #[arg(long, action = clap::ArgAction::Set)]
        available: bool,
        /// Whether the driver is on duty
        #[arg(long, action = clap::ArgAction::Set)]
        on_duty: bool,
    },
}

impl DriverCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::List {
                status,
                vehicle_type,
            } => {
                let filter = DriverFilter {
                    status,
                    vehicle_type,
                };
                print_json(&ctx.api.drivers(&filter).await?)
            }
            Self::Get { id } => print_json(&ctx.api.driver(&id).await?),
            Self::SetStatus {
                id,
                available,
                on_duty,
            } => {
                let driver = ctx.api.update_driver_status(&id, available, on_duty).await?;
                print_json(&driver)?;
                ctx.toasts
                    .success(format!("Driver {} status updated", driver.display_name()))
                    .await;
                Ok(())
            }
        }
    }
}
