use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Category
        .route("/api/categories", get(handlers::a001_category::list_all))
        .route(
            "/api/categories/:id",
            get(handlers::a001_category::get_by_id),
        )
        // A002 Supplier
        .route("/api/suppliers", get(handlers::a002_supplier::list_all))
        .route(
            "/api/suppliers/:id",
            get(handlers::a002_supplier::get_by_id),
        )
        // A003 Product
        .route("/api/products", get(handlers::a003_product::list_all))
        .route("/api/products/:id", get(handlers::a003_product::get_by_id))
        // A004 Inventory
        .route("/api/inventory", get(handlers::a004_inventory::list_all))
        .route(
            "/api/inventory/:id",
            get(handlers::a004_inventory::get_by_id),
        )
        // D400 Overview
        .route("/api/dashboard", get(handlers::d400_overview::get_summary))
        .fallback_service(ServeDir::new(static_dir))
}
