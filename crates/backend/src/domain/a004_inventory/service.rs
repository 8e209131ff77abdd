use crate::shared::data::catalog::{get_catalog, CatalogError};
use contracts::domain::a004_inventory::aggregate::Inventory;

/// Остатки вместе с товаром
pub fn list_all() -> Result<Vec<Inventory>, CatalogError> {
    Ok(get_catalog()?.inventory())
}

pub fn get_by_id(id: i64) -> Result<Inventory, CatalogError> {
    get_catalog()?.inventory_by_id(id)
}
