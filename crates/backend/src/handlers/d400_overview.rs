use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_overview::DashboardSummary;

use super::log_and_map;
use crate::dashboards::d400_overview;

/// GET /api/dashboard
pub async fn get_summary() -> Result<Json<DashboardSummary>, StatusCode> {
    d400_overview::service::get_summary()
        .map(Json)
        .map_err(log_and_map)
}
