use crate::shared::data::catalog::{get_catalog, CatalogError};
use contracts::domain::a002_supplier::aggregate::Supplier;

pub fn list_all() -> Result<Vec<Supplier>, CatalogError> {
    Ok(get_catalog()?.suppliers())
}

pub fn get_by_id(id: i64) -> Result<Supplier, CatalogError> {
    get_catalog()?.supplier_by_id(id)
}
