//! Live position reports.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// What a tracked driver is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TrackingStatus {
    Idle,
    OnDelivery,
    Returning,
    Offline,
}

/// Latest known position of a driver and their vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTrackingData {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub heading: f64,
    pub timestamp: String,
    pub status: TrackingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_delivery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
}

impl LiveTrackingData {
    /// Returns true unless the driver is offline.
    pub fn is_online(&self) -> bool {
        self.status != TrackingStatus::Offline
    }
}
