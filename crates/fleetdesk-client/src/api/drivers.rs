//! Driver endpoints.

use fleetdesk_core::types::{Driver, DriverFilter, DriverStatusUpdate};

use super::{FLEET_PREFIX, FleetApi, segment};
use crate::Result;

impl FleetApi {
    /// Lists drivers, optionally filtered by status and vehicle type.
    pub async fn drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>> {
        self.get(&format!("{FLEET_PREFIX}/drivers/"), filter).await
    }

    /// Fetches one driver.
    pub async fn driver(&self, id: &str) -> Result<Driver> {
        self.get(&format!("{FLEET_PREFIX}/drivers/{}/", segment(id)), &())
            .await
    }

    /// Sets a driver's availability and duty flags.
    pub async fn update_driver_status(
        &self,
        id: &str,
        is_available: bool,
        is_on_duty: bool,
    ) -> Result<Driver> {
        let body = DriverStatusUpdate {
            is_available,
            is_on_duty,
        };
        self.patch(
            &format!("{FLEET_PREFIX}/drivers/{}/status/", segment(id)),
            &body,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::VehicleType;
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use super::*;
    use crate::testing::{driver_json, stub_api};

    #[tokio::test]
    async fn test_drivers_filtered() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/drivers/",
                StubResponse::json(200, json!([driver_json("d1"), driver_json("d2")])),
            )
            .await;

        let filter = DriverFilter {
            status: Some("available".into()),
            vehicle_type: Some(VehicleType::Car),
        };
        let drivers = api.drivers(&filter).await.unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].display_name(), "Jane Doe");

        let request = server.last_request().await.unwrap();
        assert_eq!(
            request.query.as_deref(),
            Some("status=available&vehicle_type=car")
        );
    }

    #[tokio::test]
    async fn test_driver_by_id() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/drivers/d1/",
                StubResponse::json(200, driver_json("d1")),
            )
            .await;

        let driver = api.driver("d1").await.unwrap();
        assert_eq!(driver.username, "jdoe");
        assert!(driver.is_on_duty);
    }

    #[tokio::test]
    async fn test_update_driver_status_body() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "PATCH",
                "/api/v1/fleet-management/drivers/d1/status/",
                StubResponse::json(200, driver_json("d1")),
            )
            .await;

        api.update_driver_status("d1", false, true).await.unwrap();

        let request = server.last_request().await.unwrap();
        assert_eq!(request.method, "PATCH");
        assert_eq!(
            request.json(),
            Some(json!({ "is_available": false, "is_on_duty": true }))
        );
    }
}
