use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_product::aggregate::Product;

use super::log_and_map;
use crate::domain::a003_product;

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    a003_product::service::list_all().map(Json).map_err(log_and_map)
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Product>, StatusCode> {
    a003_product::service::get_by_id(id).map(Json).map_err(log_and_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_products_with_relations() {
        let Json(products) = list_all().await.unwrap();
        assert_eq!(products.len(), 8);
        assert!(products.iter().all(|p| p.category.is_some()));
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let status = get_by_id(Path(999)).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
