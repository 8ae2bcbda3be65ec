//! Records exchanged with the fleet-management REST API.
//!
//! Field names follow the JSON the API produces. Enumerated fields are typed,
//! so a response carrying an unknown variant fails to decode instead of
//! flowing through as an arbitrary string.

mod analytics;
mod auth;
mod company;
mod driver;
mod maintenance;
mod route;
mod tracking;
mod user;
mod vehicle;

pub use analytics::{
    AnalyticsFilter, AnalyticsPeriod, DeliveryTimePoint, DriverPerformance, FleetAnalytics,
    FleetOverview, FuelConsumptionPoint, MaintenanceCostPoint, VehicleUtilization,
};
pub use auth::{AuthTokens, TokenKind, jwt_expiry};
pub use company::CompanySettings;
pub use driver::{Driver, DriverFilter, DriverStatusUpdate};
pub use maintenance::{
    AlertFilter, AlertPriority, AlertStatus, AlertStatusUpdate, AlertType, MaintenanceAlert,
    MaintenanceFilter, MaintenancePatch, MaintenanceRecord, MaintenanceStatus,
};
pub use route::{
    DeliveryPriority, RouteDelivery, RouteFilter, RouteInfo, RoutePatch, RouteStatus,
};
pub use tracking::{LiveTrackingData, TrackingStatus};
pub use user::User;
pub use vehicle::{Vehicle, VehicleFilter, VehiclePatch, VehicleStatus, VehicleType};
