//! Vehicle records.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Kind of vehicle, shared by vehicles and drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Van,
    Bicycle,
}

/// Operational status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub license_plate: String,
    pub model: String,
    pub year: u16,
    pub status: VehicleStatus,
    pub last_maintenance_date: String,
    pub next_maintenance_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    pub mileage: f64,
    pub purchase_date: String,
    pub insurance_expiry: String,
    pub registration_expiry: String,
}

/// Partial vehicle used to create or update a vehicle.
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehiclePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_maintenance_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_expiry: Option<String>,
}

/// Query parameters for listing vehicles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
}

impl VehicleFilter {
    /// Restricts the listing to one status.
    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the listing to one vehicle type.
    pub fn with_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_vehicle_decodes_api_shape() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": "v-1",
            "name": "Van 1",
            "type": "van",
            "license_plate": "AB-123",
            "model": "Transit",
            "year": 2021,
            "status": "active",
            "last_maintenance_date": "2024-01-10",
            "next_maintenance_date": "2024-07-10",
            "mileage": 42000.5,
            "purchase_date": "2021-03-01",
            "insurance_expiry": "2025-03-01",
            "registration_expiry": "2025-03-01"
        }))
        .unwrap();

        assert_eq!(vehicle.vehicle_type, VehicleType::Van);
        assert_eq!(vehicle.status, VehicleStatus::Active);
        assert!(vehicle.assigned_driver_id.is_none());
    }

    #[test]
    fn test_vehicle_rejects_unknown_status() {
        let result = serde_json::from_value::<Vehicle>(json!({
            "id": "v-1", "name": "Van 1", "type": "van", "license_plate": "AB-123",
            "model": "Transit", "year": 2021, "status": "scrapped",
            "last_maintenance_date": "", "next_maintenance_date": "", "mileage": 1,
            "purchase_date": "", "insurance_expiry": "", "registration_expiry": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = VehiclePatch {
            name: Some("Van 2".into()),
            vehicle_type: Some(VehicleType::Van),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"name": "Van 2", "type": "van"}));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result = serde_json::from_str::<VehiclePatch>(r#"{"nmae": "typo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("bicycle".parse::<VehicleType>().unwrap(), VehicleType::Bicycle);
        assert!("truck".parse::<VehicleType>().is_err());
    }
}
