//! Subcommands and the shared client context they run against.

mod drivers;
mod fleet;
mod maintenance;
mod routes;
mod session;
mod tracking;
mod vehicles;

use std::sync::Arc;

use clap::Subcommand;
use fleetdesk_client::{AuthService, ClientConfig, FleetApi, HttpClient, TokenStore};
use fleetdesk_core::notify::ToastQueue;
use fleetdesk_core::types::AnalyticsPeriod;

use self::drivers::DriverCommand;
use self::maintenance::{AlertCommand, MaintenanceCommand};
use self::routes::RouteCommand;
use self::session::LoginArgs;
use self::tracking::TrackingCommand;
use self::vehicles::VehicleCommand;
use crate::TRACING_TARGET_COMMAND;

/// Everything a command needs to talk to the API and report outcomes.
#[derive(Debug, Clone)]
pub struct Context {
    pub api: FleetApi,
    pub auth: AuthService,
    pub toasts: ToastQueue,
}

impl Context {
    /// Builds the request wrapper shared by the facade and the auth service.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        toasts: ToastQueue,
    ) -> fleetdesk_client::Result<Self> {
        let http = HttpClient::new(config, store)?;
        Ok(Self {
            api: FleetApi::new(http.clone()),
            auth: AuthService::new(http),
            toasts,
        })
    }
}

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log in and store the token pair
    Login(LoginArgs),
    /// Forget the stored tokens
    Logout,
    /// Show whether a token is stored and when it expires
    Status,
    /// Exchange the refresh token for a new access token
    Refresh,
    /// Show company settings
    Company,
    /// Show the latest fleet overview
    Overview,
    /// Show fleet analytics
    Analytics {
        /// Reporting period (day, week, month, year)
        #[arg(long)]
        period: Option<AnalyticsPeriod>,
    },
    /// Manage vehicles
    #[command(subcommand)]
    Vehicles(VehicleCommand),
    /// Manage drivers
    #[command(subcommand)]
    Drivers(DriverCommand),
    /// Manage maintenance records
    #[command(subcommand)]
    Maintenance(MaintenanceCommand),
    /// Manage maintenance alerts
    #[command(subcommand)]
    Alerts(AlertCommand),
    /// Show live driver positions
    #[command(subcommand)]
    Tracking(TrackingCommand),
    /// Manage driver routes
    #[command(subcommand)]
    Routes(RouteCommand),
}

impl Command {
    /// Runs the command.
    pub async fn execute(self, ctx: &Context) -> anyhow::Result<()> {
        tracing::debug!(target: TRACING_TARGET_COMMAND, command = ?self, "Running command");

        match self {
            Self::Login(args) => session::login(ctx, args).await,
            Self::Logout => session::logout(ctx).await,
            Self::Status => session::status(ctx).await,
            Self::Refresh => session::refresh(ctx).await,
            Self::Company => fleet::company(ctx).await,
            Self::Overview => fleet::overview(ctx).await,
            Self::Analytics { period } => fleet::analytics(ctx, period).await,
            Self::Vehicles(command) => command.run(ctx).await,
            Self::Drivers(command) => command.run(ctx).await,
            Self::Maintenance(command) => command.run(ctx).await,
            Self::Alerts(command) => command.run(ctx).await,
            Self::Tracking(command) => command.run(ctx).await,
            Self::Routes(command) => command.run(ctx).await,
        }
    }
}
