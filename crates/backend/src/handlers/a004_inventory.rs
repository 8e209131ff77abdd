use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_inventory::aggregate::Inventory;

use super::log_and_map;
use crate::domain::a004_inventory;

/// GET /api/inventory
pub async fn list_all() -> Result<Json<Vec<Inventory>>, StatusCode> {
    a004_inventory::service::list_all().map(Json).map_err(log_and_map)
}

/// GET /api/inventory/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Inventory>, StatusCode> {
    a004_inventory::service::get_by_id(id).map(Json).map_err(log_and_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_inventory_row() {
        let Json(item) = get_by_id(Path(1)).await.unwrap();
        assert_eq!(item.quantity, 25);
        assert_eq!(item.product_name(), Some("Laptop Pro"));
    }
}
