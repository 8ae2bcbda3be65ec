//! Fleet-wide overview and analytics.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Headline counters for the whole fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetOverview {
    pub total_vehicles: u32,
    pub active_vehicles: u32,
    pub maintenance_vehicles: u32,
    pub inactive_vehicles: u32,
    pub total_drivers: u32,
    pub active_drivers: u32,
    pub on_duty_drivers: u32,
    pub off_duty_drivers: u32,
    pub deliveries_today: u32,
    pub deliveries_week: u32,
    pub deliveries_month: u32,
    pub average_delivery_time: f64,
    pub fleet_utilization: f64,
}

/// Aggregation window for analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnalyticsPeriod {
    Day,
    Week,
    Month,
    Year,
}

/// Query parameters for fleet analytics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<AnalyticsPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTimePoint {
    pub date: String,
    pub average_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleUtilization {
    pub vehicle_type: String,
    pub utilization_rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPerformance {
    pub driver_id: String,
    pub driver_name: String,
    pub deliveries: u32,
    pub rating: f64,
    pub on_time_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceCostPoint {
    pub month: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionPoint {
    pub month: String,
    pub consumption: f64,
}

/// Time series backing the analytics charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetAnalytics {
    #[serde(default)]
    pub delivery_times: Vec<DeliveryTimePoint>,
    #[serde(default)]
    pub vehicle_utilization: Vec<VehicleUtilization>,
    #[serde(default)]
    pub driver_performance: Vec<DriverPerformance>,
    #[serde(default)]
    pub maintenance_costs: Vec<MaintenanceCostPoint>,
    #[serde(default)]
    pub fuel_consumption: Vec<FuelConsumptionPoint>,
}

impl FleetAnalytics {
    /// Sum of all maintenance costs in the series.
    pub fn total_maintenance_cost(&self) -> f64 {
        self.maintenance_costs.iter().map(|point| point.cost).sum()
    }
}
