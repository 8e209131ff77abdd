use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_category::aggregate::Category;

use super::log_and_map;
use crate::domain::a001_category;

/// GET /api/categories
pub async fn list_all() -> Result<Json<Vec<Category>>, StatusCode> {
    a001_category::service::list_all().map(Json).map_err(log_and_map)
}

/// GET /api/categories/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Category>, StatusCode> {
    a001_category::service::get_by_id(id).map(Json).map_err(log_and_map)
}
