//! Live tracking endpoints.

use fleetdesk_core::types::LiveTrackingData;

use super::{FLEET_PREFIX, FleetApi, segment};
use crate::Result;

impl FleetApi {
    /// Fetches the latest position of every tracked driver.
    pub async fn live_tracking(&self) -> Result<Vec<LiveTrackingData>> {
        self.get(&format!("{FLEET_PREFIX}/live-tracking/latest/"), &())
            .await
    }

    /// Fetches the latest position of one driver.
    pub async fn driver_location(&self, driver_id: &str) -> Result<LiveTrackingData> {
        self.get(
            &format!("{FLEET_PREFIX}/live-tracking/{}/", segment(driver_id)),
            &(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::TrackingStatus;
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use crate::testing::{stub_api, tracking_json};

    #[tokio::test]
    async fn test_live_tracking() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/live-tracking/latest/",
                StubResponse::json(200, json!([tracking_json("d1")])),
            )
            .await;

        let positions = api.live_tracking().await.unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].status, TrackingStatus::OnDelivery);
        assert!(positions[0].is_online());
    }

    #[tokio::test]
    async fn test_driver_location() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/live-tracking/d1/",
                StubResponse::json(200, tracking_json("d1")),
            )
            .await;

        let position = api.driver_location("d1").await.unwrap();
        assert_eq!(position.current_delivery_id.as_deref(), Some("o-77"));
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let (server, api) = stub_api().await;
        let mut body = tracking_json("d1");
        body["status"] = json!("teleporting");
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/live-tracking/d1/",
                StubResponse::json(200, body),
            )
            .await;

        let error = api.driver_location("d1").await.unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::Serialization);
    }
}
