//! `maintenance` and `alerts` subcommands.

use clap::Subcommand;
use fleetdesk_core::types::{
    AlertFilter, AlertPriority, AlertStatus, MaintenanceFilter, MaintenancePatch,
    MaintenanceStatus,
};

use super::Context;
use crate::output::{parse_data, print_json};

#[derive(Debug, Clone, Subcommand)]
pub enum MaintenanceCommand {
    /// List maintenance records
    List {
        /// Only records for this vehicle
        #[arg(long)]
        vehicle_id: Option<String>,
        /// Only records with this status
        #[arg(long)]
        status: Option<MaintenanceStatus>,
    },
    /// Show one maintenance record
    Get { id: String },
    /// Create a maintenance record from a JSON document
    Create {
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
    /// Update a maintenance record from a partial JSON document
    Update {
        id: String,
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
}

impl MaintenanceCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::List { vehicle_id, status } => {
                let filter = MaintenanceFilter { vehicle_id, status };
                print_json(&ctx.api.maintenance_records(&filter).await?)
            }
            Self::Get { id } => print_json(&ctx.api.maintenance_record(&id).await?),
            Self::Create { data } => {
                let draft: MaintenancePatch = parse_data(&data).await?;
                let record = ctx.api.create_maintenance_record(&draft).await?;
                print_json(&record)?;
                ctx.toasts
                    .success(format!("Maintenance record {} created", record.id))
                    .await;
                Ok(())
            }
            Self::Update { id, data } => {
                let patch: MaintenancePatch = parse_data(&data).await?;
                print_json(&ctx.api.update_maintenance_record(&id, &patch).await?)?;
                ctx.toasts
                    .success(format!("Maintenance record {id} updated"))
                    .await;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum AlertCommand {
    /// List maintenance alerts
    List {
        /// Only alerts with this priority (low, medium, high, critical)
        #[arg(long)]
        priority: Option<AlertPriority>,
        /// Only alerts in this state (pending, in_progress, resolved, ignored)
        #[arg(long)]
        status: Option<AlertStatus>,
    },
    /// Move an alert to a new state
    SetStatus { id: String, status: AlertStatus },
}

impl AlertCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::List { priority, status } => {
                let filter = AlertFilter { priority, status };
                print_json(&ctx.api.maintenance_alerts(&filter).await?)
            }
            Self::SetStatus { id, status } => {
                print_json(&ctx.api.update_alert_status(&id, status).await?)?;
                ctx.toasts
                    .success(format!("Alert {id} marked {status}"))
                    .await;
                Ok(())
            }
        }
    }
}
