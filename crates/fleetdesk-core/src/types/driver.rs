//! Driver records.

use serde::{Deserialize, Serialize};

use super::VehicleType;

/// A driver and their delivery statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub is_available: bool,
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub license_number: String,
    pub total_deliveries: u32,
    pub successful_deliveries: u32,
    pub average_rating: f64,
    pub total_earnings: f64,
    pub is_on_duty: bool,
    pub success_rate: f64,
    pub created_at: String,
}

impl Driver {
    /// Returns "first last", falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

/// Body of a driver availability update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStatusUpdate {
    pub is_available: bool,
    pub is_on_duty: bool,
}

/// Query parameters for listing drivers.
///
/// `status` is passed through verbatim; the API defines its vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn driver(first: &str, last: &str) -> Driver {
        serde_json::from_value(json!({
            "id": "d-1", "username": "jdoe", "first_name": first, "last_name": last,
            "email": "jdoe@example.com", "phone_number": "+100", "is_available": true,
            "vehicle_type": "motorcycle", "vehicle_number": "M-1", "license_number": "L-1",
            "total_deliveries": 10, "successful_deliveries": 9, "average_rating": 4.5,
            "total_earnings": 1200.0, "is_on_duty": false, "success_rate": 90.0,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(driver("Jane", "Doe").display_name(), "Jane Doe");
        assert_eq!(driver("", "").display_name(), "jdoe");
    }

    #[test]
    fn test_status_update_body() {
        let body = DriverStatusUpdate {
            is_available: false,
            is_on_duty: true,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"is_available": false, "is_on_duty": true})
        );
    }
}
