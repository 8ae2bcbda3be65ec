//! Fixtures shared by unit tests.

use std::sync::Arc;

use fleetdesk_core::types::AuthTokens;
use fleetdesk_test::StubServer;
use serde_json::{Value, json};

use crate::{ClientConfig, FleetApi, MemoryTokenStore};

/// Starts a stub server and a facade logged in as `A1`/`R1`.
pub(crate) async fn stub_api() -> (StubServer, FleetApi) {
    let server = StubServer::start().await.unwrap();
    let store = Arc::new(MemoryTokenStore::with_tokens(AuthTokens::new("A1", "R1")));
    let api = FleetApi::from_config(ClientConfig::new(server.url()), store).unwrap();
    (server, api)
}

pub(crate) fn vehicle_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Van 7",
        "type": "van",
        "license_plate": "FLT-007",
        "model": "Transit",
        "year": 2021,
        "status": "active",
        "last_maintenance_date": "2024-01-10",
        "next_maintenance_date": "2024-07-10",
        "assigned_driver_id": "d1",
        "fuel_level": 64.5,
        "mileage": 48210.0,
        "purchase_date": "2021-03-01",
        "insurance_expiry": "2025-03-01",
        "registration_expiry": "2025-03-01"
    })
}

pub(crate) fn driver_json(id: &str) -> Value {
    json!({
        "id": id,
        "username": "jdoe",
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@example.com",
        "phone_number": "+1-555-0100",
        "is_available": true,
        "vehicle_type": "car",
        "vehicle_number": "CAR-12",
        "license_number": "D1234567",
        "total_deliveries": 120,
        "successful_deliveries": 118,
        "average_rating": 4.8,
        "total_earnings": 5400.0,
        "is_on_duty": true,
        "success_rate": 98.3,
        "created_at": "2023-05-01T08:00:00Z"
    })
}

pub(crate) fn maintenance_record_json(id: &str) -> Value {
    json!({
        "id": id,
        "vehicle_id": "v1",
        "vehicle_name": "Van 7",
        "service_type": "oil_change",
        "description": "Oil and filter",
        "service_date": "2024-02-01",
        "cost": 89.9,
        "performed_by": "QuickLube",
        "status": "completed"
    })
}

pub(crate) fn alert_json(id: &str) -> Value {
    json!({
        "id": id,
        "vehicle_id": "v1",
        "vehicle_name": "Van 7",
        "alert_type": "inspection_due",
        "description": "Annual inspection",
        "due_date": "2024-03-01",
        "priority": "high",
        "status": "pending",
        "created_at": "2024-02-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z",
        "estimated_cost": 150.0
    })
}

pub(crate) fn tracking_json(driver_id: &str) -> Value {
    json!({
        "driver_id": driver_id,
        "driver_name": "Jane Doe",
        "vehicle_id": "v1",
        "vehicle_type": "van",
        "latitude": 40.7128,
        "longitude": -74.006,
        "speed": 32.5,
        "heading": 180.0,
        "timestamp": "2024-02-01T12:00:00Z",
        "status": "on_delivery",
        "current_delivery_id": "o-77"
    })
}

pub(crate) fn route_json(id: &str) -> Value {
    json!({
        "id": id,
        "driver_id": "d1",
        "driver_name": "Jane Doe",
        "vehicle_id": "v1",
        "start_time": "2024-02-01T08:00:00Z",
        "total_distance": 42.0,
        "total_deliveries": 4,
        "completed_deliveries": 1,
        "status": "in_progress",
        "deliveries": [{
            "id": "s1",
            "order_id": "o-77",
            "customer_name": "Bob",
            "address": "1 Main St",
            "status": "pending",
            "estimated_arrival": "2024-02-01T09:00:00Z",
            "priority": "high"
        }]
    })
}
