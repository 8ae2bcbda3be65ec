//! `vehicles` subcommands.

use clap::Subcommand;
use fleetdesk_core::types::{VehicleFilter, VehiclePatch, VehicleStatus, VehicleType};

use super::Context;
use crate::output::{parse_data, print_json};

#[derive(Debug, Clone, Subcommand)]
pub enum VehicleCommand {
    /// List vehicles
    List {
        /// Only vehicles with this status (active, maintenance, inactive)
        #[arg(long)]
        status: Option<VehicleStatus>,
        /// Only vehicles of this type (car, motorcycle, van, bicycle)
        #[arg(long = "type")]
        vehicle_type: Option<VehicleType>,
    },
    /// Show one vehicle
    Get { id: String },
    /// Create a vehicle from a JSON document
    Create {
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
    /// Update a vehicle from a partial JSON document
    Update {
        id: String,
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
    /// Delete a vehicle
    Delete { id: String },
}

impl VehicleCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::List {
                status,
                vehicle_type,
            } => {
                let filter = VehicleFilter {
                    status,
                    vehicle_type,
                };
                print_json(&ctx.api.vehicles(&filter).await?)
            }
            Self::Get { id } => print_json(&ctx.api.vehicle(&id).await?),
            Self::Create { data } => {
                let draft: VehiclePatch = parse_data(&data).await?;
                let vehicle = ctx.api.create_vehicle(&draft).await?;
                print_json(&vehicle)?;
                ctx.toasts
                    .success(format!("Vehicle {} created", vehicle.id))
                    .await;
                Ok(())
            }
            Self::Update { id, data } => {
                let patch: VehiclePatch = parse_data(&data).await?;
                print_json(&ctx.api.update_vehicle(&id, &patch).await?)?;
                ctx.toasts.success(format!("Vehicle {id} updated")).await;
                Ok(())
            }
            Self::Delete { id } => {
                ctx.api.delete_vehicle(&id).await?;
                ctx.toasts.success(format!("Vehicle {id} deleted")).await;
                Ok(())
            }
        }
    }
}
