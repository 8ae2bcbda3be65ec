//! `routes` subcommands.

use clap::Subcommand;
use fleetdesk_core::types::{RouteFilter, RoutePatch, RouteStatus};

use super::Context;
use crate::output::{parse_data, print_json};

#[derive(Debug, Clone, Subcommand)]
pub enum RouteCommand {
    /// List routes
    List {
        /// Only routes in this state
        #[arg(long)]
        status: Option<RouteStatus>,
        /// Only routes assigned to this driver
        #[arg(long)]
        driver_id: Option<String>,
    },
    /// Show one route with its deliveries
    Get { id: String },
    /// Create a route from a JSON document
    Create {
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
    /// Update a route from a partial JSON document
    Update {
        id: String,
        /// Inline JSON or @file
        #[arg(long)]
        data: String,
    },
}

impl RouteCommand {
    pub async fn run(self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Self::List { status, driver_id } => {
                let filter = RouteFilter { status, driver_id };
                print_json(&ctx.api.routes(&filter).await?)
            }
            Self::Get { id } => print_json(&ctx.api.route(&id).await?),
            Self::Create { data } => {
                let draft: RoutePatch = parse_data(&data).await?;
                let route = ctx.api.create_route(&draft).await?;
                print_json(&route)?;
                ctx.toasts
                    .success(format!("Route {} created", route.id))
                    .await;
                Ok(())
            }
            Self::Update { id, data } => {
                let patch: RoutePatch = parse_data(&data).await?;
                print_json(&ctx.api.update_route(&id, &patch).await?)?;
                ctx.toasts.success(format!("Route {id} updated")).await;
                Ok(())
            }
        }
    }
}
