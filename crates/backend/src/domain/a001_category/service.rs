use crate::shared::data::catalog::{get_catalog, CatalogError};
use contracts::domain::a001_category::aggregate::Category;

pub fn list_all() -> Result<Vec<Category>, CatalogError> {
    Ok(get_catalog()?.categories())
}

pub fn get_by_id(id: i64) -> Result<Category, CatalogError> {
    get_catalog()?.category_by_id(id)
}
