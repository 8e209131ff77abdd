use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_supplier::aggregate::Supplier;

use super::log_and_map;
use crate::domain::a002_supplier;

/// GET /api/suppliers
pub async fn list_all() -> Result<Json<Vec<Supplier>>, StatusCode> {
    a002_supplier::service::list_all().map(Json).map_err(log_and_map)
}

/// GET /api/suppliers/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Supplier>, StatusCode> {
    a002_supplier::service::get_by_id(id).map(Json).map_err(log_and_map)
}
