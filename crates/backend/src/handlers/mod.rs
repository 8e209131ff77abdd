pub mod a001_category;
pub mod a002_supplier;
pub mod a003_product;
pub mod a004_inventory;
pub mod d400_overview;

use crate::shared::data::catalog::CatalogError;
use axum::http::StatusCode;

/// Отображение ошибок каталога в HTTP-статусы
pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
        CatalogError::Fixtures(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: CatalogError) -> StatusCode {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("Catalog request failed: {}", err);
    } else {
        tracing::debug!("{}", err);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_not_found() {
        let err = CatalogError::NotFound {
            entity: "product",
            id: 1,
        };
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_status_for_broken_fixtures() {
        let err = CatalogError::from(serde_json::from_str::<i64>("x").unwrap_err());
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
