//! Vehicle endpoints.

use fleetdesk_core::types::{Vehicle, VehicleFilter, VehiclePatch};

use super::{FLEET_PREFIX, FleetApi, segment};
use crate::Result;

fn collection() -> String {
    format!("{FLEET_PREFIX}/vehicles/")
}

fn item(id: &str) -> String {
    format!("{FLEET_PREFIX}/vehicles/{}/", segment(id))
}

impl FleetApi {
    /// Lists vehicles, optionally filtered by status and type.
    pub async fn vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>> {
        self.get(&collection(), filter).await
    }

    /// Fetches one vehicle.
    pub async fn vehicle(&self, id: &str) -> Result<Vehicle> {
        self.get(&item(id), &()).await
    }

    /// Creates a vehicle and returns it as stored.
    pub async fn create_vehicle(&self, vehicle: &VehiclePatch) -> Result<Vehicle> {
        self.post(&collection(), vehicle).await
    }

    /// Applies a partial update to a vehicle.
    pub async fn update_vehicle(&self, id: &str, patch: &VehiclePatch) -> Result<Vehicle> {
        self.patch(&item(id), patch).await
    }

    /// Deletes a vehicle.
    pub async fn delete_vehicle(&self, id: &str) -> Result<()> {
        self.delete(&item(id)).await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::{VehicleStatus, VehicleType};
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;
    use crate::testing::{stub_api, vehicle_json};

    #[tokio::test]
    async fn test_vehicles_filtered_by_status() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/vehicles/",
                StubResponse::json(200, json!([vehicle_json("v1")])),
            )
            .await;

        let filter = VehicleFilter::default().with_status(VehicleStatus::Active);
        let vehicles = api.vehicles(&filter).await.unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].vehicle_type, VehicleType::Van);

        let request = server.last_request().await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/v1/fleet-management/vehicles/");
        assert_eq!(request.query.as_deref(), Some("status=active"));
        assert_eq!(request.header("authorization"), Some("Bearer A1"));
    }

    #[tokio::test]
    async fn test_vehicles_without_filter_sends_no_query() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/vehicles/",
                StubResponse::json(200, json!([])),
            )
            .await;

        let filter = VehicleFilter::default().with_type(VehicleType::Bicycle);
        api.vehicles(&filter).await.unwrap();
        assert_eq!(
            server.last_request().await.unwrap().query.as_deref(),
            Some("type=bicycle")
        );

        api.vehicles(&VehicleFilter::default()).await.unwrap();
        assert_eq!(server.last_request().await.unwrap().query, None);
    }

    #[tokio::test]
    async fn test_vehicle_id_is_one_path_segment() {
        let (server, api) = stub_api().await;

        let error = api.vehicle("a/b c").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);

        let request = server.last_request().await.unwrap();
        assert_eq!(request.path, "/api/v1/fleet-management/vehicles/a%2Fb%20c/");
    }

    #[tokio::test]
    async fn test_update_vehicle_sends_only_set_fields() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "PATCH",
                "/api/v1/fleet-management/vehicles/v1/",
                StubResponse::json(200, vehicle_json("v1")),
            )
            .await;

        let patch = VehiclePatch {
            status: Some(VehicleStatus::Maintenance),
            ..VehiclePatch::default()
        };
        let vehicle = api.update_vehicle("v1", &patch).await.unwrap();
        assert_eq!(vehicle.id, "v1");

        let request = server.last_request().await.unwrap();
        assert_eq!(request.json(), Some(json!({ "status": "maintenance" })));
    }

    #[tokio::test]
    async fn test_create_and_delete_vehicle() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "POST",
                "/api/v1/fleet-management/vehicles/",
                StubResponse::json(201, vehicle_json("v9")),
            )
            .await;
        server
            .respond(
                "DELETE",
                "/api/v1/fleet-management/vehicles/v9/",
                StubResponse::empty(204),
            )
            .await;

        let patch = VehiclePatch {
            name: Some("Van 7".into()),
            vehicle_type: Some(VehicleType::Van),
            ..VehiclePatch::default()
        };
        let created = api.create_vehicle(&patch).await.unwrap();
        assert_eq!(created.id, "v9");
        assert_eq!(
            server.last_request().await.unwrap().json(),
            Some(json!({ "name": "Van 7", "type": "van" }))
        );

        api.delete_vehicle("v9").await.unwrap();
        assert_eq!(server.requests().await.len(), 2);
    }
}
