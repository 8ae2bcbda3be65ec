//! `company`, `overview` and `analytics`.

use fleetdesk_core::types::{AnalyticsFilter, AnalyticsPeriod};

use super::Context;
use crate::output::print_json;

pub async fn company(ctx: &Context) -> anyhow::Result<()> {
    print_json(&ctx.api.company_settings().await?)
}

pub async fn overview(ctx: &Context) -> anyhow::Result<()> {
    print_json(&ctx.api.fleet_overview().await?)
}

pub async fn analytics(ctx: &Context, period: Option<AnalyticsPeriod>) -> anyhow::Result<()> {
    let analytics = ctx.api.fleet_analytics(&AnalyticsFilter { period }).await?;
    print_json(&analytics)
}
