use crate::shared::data::catalog::{get_catalog, CatalogError};
use contracts::dashboards::d400_overview::DashboardSummary;

pub fn get_summary() -> Result<DashboardSummary, CatalogError> {
    Ok(get_catalog()?.dashboard())
}
