//! Driver route endpoints.

use fleetdesk_core::types::{RouteFilter, RouteInfo, RoutePatch};

use super::{FLEET_PREFIX, FleetApi, segment};
use crate::Result;

fn route(id: &str) -> String {
    format!("{FLEET_PREFIX}/driver-routes/{}/", segment(id))
}

impl FleetApi {
    /// Lists routes, optionally by status and driver.
    pub async fn routes(&self, filter: &RouteFilter) -> Result<Vec<RouteInfo>> {
        self.get(&format!("{FLEET_PREFIX}/driver-routes/"), filter)
            .await
    }

    /// Fetches one route with its deliveries.
    pub async fn route(&self, id: &str) -> Result<RouteInfo> {
        self.get(&route(id), &()).await
    }

    /// Creates a route.
    pub async fn create_route(&self, route: &RoutePatch) -> Result<RouteInfo> {
        self.post(&format!("{FLEET_PREFIX}/driver-routes/"), route)
            .await
    }

    /// Applies a partial update to a route.
    pub async fn update_route(&self, id: &str, patch: &RoutePatch) -> Result<RouteInfo> {
        self.patch(&route(id), patch).await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::RouteStatus;
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use super::*;
    use crate::testing::{route_json, stub_api};

    #[tokio::test]
    async fn test_routes_for_driver() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/driver-routes/",
                StubResponse::json(200, json!([route_json("r1")])),
            )
            .await;

        let filter = RouteFilter {
            status: Some(RouteStatus::InProgress),
            driver_id: Some("d1".into()),
        };
        let routes = api.routes(&filter).await.unwrap();
        assert_eq!(routes[0].deliveries.len(), 1);
        assert_eq!(routes[0].progress(), 0.25);
        let query = server.last_request().await.unwrap().query.unwrap();
        let mut pairs: Vec<&str> = query.split('&').collect();
        pairs.sort_unstable();
        assert_eq!(pairs, ["driver_id=d1", "status=in_progress"]);
    }

    #[tokio::test]
    async fn test_route_create_get_update() {
        let (server, api) = stub_api().await;
        for (method, path) in [
            ("POST", "/api/v1/fleet-management/driver-routes/"),
            ("GET", "/api/v1/fleet-management/driver-routes/r1/"),
            ("PATCH", "/api/v1/fleet-management/driver-routes/r1/"),
        ] {
            server
                .respond(method, path, StubResponse::json(200, route_json("r1")))
                .await;
        }

        let draft = RoutePatch {
            driver_id: Some("d1".into()),
            vehicle_id: Some("v1".into()),
            ..RoutePatch::default()
        };
        assert_eq!(api.create_route(&draft).await.unwrap().id, "r1");
        assert_eq!(api.route("r1").await.unwrap().driver_name, "Jane Doe");

        let patch = RoutePatch {
            status: Some(RouteStatus::Completed),
            ..RoutePatch::default()
        };
        api.update_route("r1", &patch).await.unwrap();
        assert_eq!(
            server.last_request().await.unwrap().json(),
            Some(json!({ "status": "completed" }))
        );
    }
}
