//! Company settings, fleet overview and analytics.

use fleetdesk_core::types::{AnalyticsFilter, CompanySettings, FleetAnalytics, FleetOverview};

use super::{FLEET_PREFIX, FleetApi};
use crate::Result;

impl FleetApi {
    /// Fetches the company branding and feature flags.
    pub async fn company_settings(&self) -> Result<CompanySettings> {
        self.get("/api/v1/company/settings/", &()).await
    }

    /// Fetches the latest fleet-wide snapshot.
    pub async fn fleet_overview(&self) -> Result<FleetOverview> {
        self.get(&format!("{FLEET_PREFIX}/fleet-analytics/latest/"), &())
            .await
    }

    /// Fetches analytics series, optionally for one reporting period.
    pub async fn fleet_analytics(&self, filter: &AnalyticsFilter) -> Result<FleetAnalytics> {
        self.get(&format!("{FLEET_PREFIX}/fleet-analytics/"), filter)
            .await
    }
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::types::AnalyticsPeriod;
    use fleetdesk_test::StubResponse;
    use serde_json::json;

    use super::*;
    use crate::testing::stub_api;

    #[tokio::test]
    async fn test_company_settings() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/company/settings/",
                StubResponse::json(
                    200,
                    json!({
                        "id": "1",
                        "company_name": "Acme Logistics",
                        "primary_color": "#1976d2",
                        "enable_fleet_management": true,
                        "enable_route_optimization": true,
                        "enable_maintenance_tracking": true,
                        "enable_driver_app": false,
                        "enable_customer_notifications": false,
                        "default_map_center_lat": 40.7128,
                        "default_map_center_lng": -74.006,
                        "default_map_zoom": 12
                    }),
                ),
            )
            .await;

        let settings = api.company_settings().await.unwrap();
        assert_eq!(settings.company_name, "Acme Logistics");
        assert_eq!(settings.primary_color.as_deref(), Some("#1976d2"));
        assert!(!settings.enable_driver_app);
    }

    #[tokio::test]
    async fn test_fleet_overview_reads_latest_snapshot() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/fleet-analytics/latest/",
                StubResponse::json(
                    200,
                    json!({
                        "total_vehicles": 12,
                        "active_vehicles": 9,
                        "maintenance_vehicles": 2,
                        "inactive_vehicles": 1,
                        "total_drivers": 15,
                        "active_drivers": 11,
                        "on_duty_drivers": 8,
                        "off_duty_drivers": 7,
                        "deliveries_today": 42,
                        "deliveries_week": 280,
                        "deliveries_month": 1130,
                        "average_delivery_time": 31.5,
                        "fleet_utilization": 0.82
                    }),
                ),
            )
            .await;

        let overview = api.fleet_overview().await.unwrap();
        assert_eq!(overview.total_vehicles, 12);
        assert_eq!(overview.deliveries_today, 42);
    }

    #[tokio::test]
    async fn test_fleet_analytics_passes_period() {
        let (server, api) = stub_api().await;
        server
            .respond(
                "GET",
                "/api/v1/fleet-management/fleet-analytics/",
                StubResponse::json(200, json!({})),
            )
            .await;

        let filter = AnalyticsFilter {
            period: Some(AnalyticsPeriod::Month),
        };
        let analytics = api.fleet_analytics(&filter).await.unwrap();
        assert!(analytics.delivery_times.is_empty());

        let request = server.last_request().await.unwrap();
        assert_eq!(request.query.as_deref(), Some("period=month"));
    }
}
