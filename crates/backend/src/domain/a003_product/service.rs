use crate::shared::data::catalog::{get_catalog, CatalogError};
use contracts::domain::a003_product::aggregate::Product;

/// Товары вместе с категорией и поставщиком
pub fn list_all() -> Result<Vec<Product>, CatalogError> {
    Ok(get_catalog()?.products())
}

pub fn get_by_id(id: i64) -> Result<Product, CatalogError> {
    get_catalog()?.product_by_id(id)
}
