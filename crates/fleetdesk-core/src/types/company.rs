//! Company-wide settings.

use serde::{Deserialize, Serialize};

/// Branding, feature toggles and map defaults for the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub id: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    pub enable_fleet_management: bool,
    pub enable_route_optimization: bool,
    pub enable_maintenance_tracking: bool,
    pub enable_driver_app: bool,
    pub enable_customer_notifications: bool,
    pub default_map_center_lat: f64,
    pub default_map_center_lng: f64,
    pub default_map_zoom: f64,
}
