//! Driver routes and their deliveries.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle of a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Urgency of a single delivery stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeliveryPriority {
    Low,
    Medium,
    High,
}

/// One stop on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDelivery {
    pub id: String,
    pub order_id: String,
    pub customer_name: String,
    pub address: String,
    pub status: String,
    pub estimated_arrival: String,
    pub priority: DeliveryPriority,
}

/// A route assigned to a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_id: String,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub total_distance: f64,
    pub total_deliveries: u32,
    pub completed_deliveries: u32,
    pub status: RouteStatus,
    #[serde(default)]
    pub deliveries: Vec<RouteDelivery>,
}

impl RouteInfo {
    /// Share of deliveries completed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_deliveries == 0 {
            return 0.0;
        }
        (f64::from(self.completed_deliveries) / f64::from(self.total_deliveries)).min(1.0)
    }
}

/// Partial route used to create or update a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RouteStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<Vec<RouteDelivery>>,
}

/// Query parameters for listing routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RouteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_route_decodes_with_deliveries() {
        let route: RouteInfo = serde_json::from_value(json!({
            "id": "r-1",
            "driver_id": "d-1",
            "driver_name": "Jane Doe",
            "vehicle_id": "v-1",
            "start_time": "2024-05-01T08:00:00Z",
            "total_distance": 52.3,
            "total_deliveries": 4,
            "completed_deliveries": 1,
            "status": "in_progress",
            "deliveries": [{
                "id": "s-1",
                "order_id": "o-1",
                "customer_name": "ACME",
                "address": "1 Main St",
                "status": "delivered",
                "estimated_arrival": "2024-05-01T09:00:00Z",
                "priority": "high"
            }]
        }))
        .unwrap();

        assert_eq!(route.status, RouteStatus::InProgress);
        assert_eq!(route.deliveries.len(), 1);
        assert_eq!(route.deliveries[0].priority, DeliveryPriority::High);
        assert!((route.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_without_deliveries() {
        let route = RouteInfo {
            id: "r-2".into(),
            driver_id: "d-1".into(),
            driver_name: "Jane Doe".into(),
            vehicle_id: "v-1".into(),
            start_time: "2024-05-01T08:00:00Z".into(),
            end_time: None,
            total_distance: 0.0,
            total_deliveries: 0,
            completed_deliveries: 0,
            status: RouteStatus::Planned,
            deliveries: Vec::new(),
        };
        assert_eq!(route.progress(), 0.0);
    }
}
