//! Maintenance record and alert endpoints.

use fleetdesk_core::types::{
    AlertFilter, AlertStatus, AlertStatusUpdate, MaintenanceAlert, MaintenanceFilter,
    MaintenancePatch, MaintenanceRecord,
};

use super::{FLEET_PREFIX, FleetApi, segment};
use crate::Result;

fn record(id: &str) -> String {
    format!("{FLEET_PREFIX}/maintenance-records/{}/", segment(id))
}

impl FleetApi {
    /// Lists maintenance records, optionally for one vehicle or status.
    pub async fn maintenance_records(
        &self,
        filter: &MaintenanceFilter,
    ) -> Result<Vec<MaintenanceRecord>> {
        self.get(&format!("{FLEET_PREFIX}/maintenance-records/"), filter)
            .await
    }

    /// Fetches one maintenance record.
    pub async fn maintenance_record(&self, id: &str) -> Result<MaintenanceRecord> {
        self.get(&record(id), &()).await
    }

    /// Creates a maintenance record.
    pub async fn create_maintenance_record(
        &self,
        record: &MaintenancePatch,
    ) -> Result<MaintenanceRecord> {
        self.post(&format!("{FLEET_PREFIX}/maintenance-records/"), record)
            .await
    }

    /// Applies a partial update to a maintenance record.
    pub async fn update_maintenance_record(
        &self,
        id: &str,
        patch: &MaintenancePatch,
    ) -> Result<MaintenanceRecord> {
        self.patch(&record(id), patch).await
    }

    /// Lists maintenance alerts, optionally by priority and status.
    pub async fn maintenance_alerts(&self, filter: &AlertFilter) -> Result<Vec<MaintenanceAlert>> {
        self.get(&format!("{FLEET_PREFIX}/maintenance-alerts/"), filter)
            .await
    }

    /// Moves an alert to a new handling state.
    pub async fn update_alert_status(
        &self,
        id: &str,
        status: AlertStatus,
    ) -> Result<MaintenanceAlert> {
        self.patch(
            &format!("{FLEET_PREFIX}/maintenance-alerts/{}/status/", segment(id)),
            &AlertStatusUpdate { status },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::{AlertPriority, MaintenanceStatus};
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;
    use crate::testing::{alert_json, maintenance_record_json, stub_api};

    #[tokio::test]
    async fn test_records_for_vehicle() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/maintenance-records/",
                StubResponse::json(200, json!([maintenance_record_json("m1")])),
            )
            .await;

        let filter = MaintenanceFilter {
            vehicle_id: Some("v1".into()),
            status: None,
        };
        let records = api.maintenance_records(&filter).await.unwrap();
        assert_eq!(records[0].status, MaintenanceStatus::Completed);
        assert_eq!(
            server.last_request().await.unwrap().query.as_deref(),
            Some("vehicle_id=v1")
        );
    }

    #[tokio::test]
    async fn test_create_and_update_record() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "POST",
                "/api/v1/fleet-management/maintenance-records/",
                StubResponse::json(201, maintenance_record_json("m2")),
            )
            .await;
        server
            .respond(
                "PATCH",
                "/api/v1/fleet-management/maintenance-records/m2/",
                StubResponse::json(200, maintenance_record_json("m2")),
            )
            .await;

        let patch = MaintenancePatch {
            vehicle_id: Some("v1".into()),
            cost: Some(89.9),
            ..MaintenancePatch::default()
        };
        let created = api.create_maintenance_record(&patch).await.unwrap();
        assert_eq!(created.id, "m2");

        let update = MaintenancePatch {
            status: Some(MaintenanceStatus::Completed),
            ..MaintenancePatch::default()
        };
        api.update_maintenance_record("m2", &update).await.unwrap();
        assert_eq!(
            server.last_request().await.unwrap().json(),
            Some(json!({ "status": "completed" }))
        );
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/maintenance-records/m404/",
                StubResponse::json(404, json!({ "detail": "Not found" })),
            )
            .await;

        let error = api.maintenance_record("m404").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Not found"));
    }

    #[tokio::test]
    async fn test_alerts_and_status_update() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/maintenance-alerts/",
                StubResponse::json(200, json!([alert_json("a1")])),
            )
            .await;
        server
            .respond(
                "PATCH",
                "/api/v1/fleet-management/maintenance-alerts/a1/status/",
                StubResponse::json(200, alert_json("a1")),
            )
            .await;

        let filter = AlertFilter {
            priority: Some(AlertPriority::High),
            status: Some(AlertStatus::Pending),
        };
        let alerts = api.maintenance_alerts(&filter).await.unwrap();
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(
            server.last_request().await.unwrap().query.as_deref(),
            Some("priority=high&status=pending")
        );

        api.update_alert_status("a1", AlertStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(
            server.last_request().await.unwrap().json(),
            Some(json!({ "status": "resolved" }))
        );
    }
}
