use crate::shared::api_utils::fetch_json;
use contracts::dashboards::d400_overview::DashboardSummary;

pub async fn get_summary() -> Result<DashboardSummary, String> {
    fetch_json("/api/dashboard").await
}
