//! In-memory каталог, загружаемый из встроенных фикстур.
//!
//! Записи только читаются: формы создания и редактирования живут вне этого сервиса.

use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_inventory::aggregate::Inventory;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

const CATALOG_FIXTURES: &str = include_str!("catalog_fixtures.json");

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Ошибки доступа к каталогу
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("failed to parse catalog fixtures: {0}")]
    Fixtures(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
    inventory: Vec<Inventory>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_fixtures() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_FIXTURES)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn category_by_id(&self, id: i64) -> Result<Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                entity: "category",
                id,
            })
    }

    pub fn suppliers(&self) -> Vec<Supplier> {
        self.suppliers.clone()
    }

    pub fn supplier_by_id(&self, id: i64) -> Result<Supplier, CatalogError> {
        self.suppliers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                entity: "supplier",
                id,
            })
    }

    /// Товары с заполненными категорией и поставщиком
    pub fn products(&self) -> Vec<Product> {
        self.products
            .iter()
            .map(|p| self.with_relations(p))
            .collect()
    }

    pub fn product_by_id(&self, id: i64) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.with_relations(p))
            .ok_or(CatalogError::NotFound {
                entity: "product",
                id,
            })
    }

    /// Остатки с заполненным товаром (включая его связи)
    pub fn inventory(&self) -> Vec<Inventory> {
        self.inventory
            .iter()
            .map(|i| self.with_product(i))
            .collect()
    }

    pub fn inventory_by_id(&self, id: i64) -> Result<Inventory, CatalogError> {
        self.inventory
            .iter()
            .find(|i| i.id == id)
            .map(|i| self.with_product(i))
            .ok_or(CatalogError::NotFound {
                entity: "inventory",
                id,
            })
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(
            &self.products(),
            &self.categories,
            &self.suppliers,
            &self.inventory(),
        )
    }

    fn with_relations(&self, product: &Product) -> Product {
        Product {
            category: self
                .categories
                .iter()
                .find(|c| c.id == product.category_id)
                .cloned(),
            supplier: self
                .suppliers
                .iter()
                .find(|s| s.id == product.supplier_id)
                .cloned(),
            ..product.clone()
        }
    }

    fn with_product(&self, item: &Inventory) -> Inventory {
        Inventory {
            product: self
                .products
                .iter()
                .find(|p| p.id == item.product_id)
                .map(|p| self.with_relations(p)),
            ..item.clone()
        }
    }
}

/// Загружает фикстуры в глобальный каталог (повторный вызов ничего не делает)
pub fn initialize_catalog() -> anyhow::Result<&'static Catalog> {
    let catalog = CATALOG.get_or_try_init(Catalog::from_fixtures)?;
    tracing::info!(
        "Catalog loaded: {} categories, {} suppliers, {} products, {} inventory rows",
        catalog.categories.len(),
        catalog.suppliers.len(),
        catalog.products.len(),
        catalog.inventory.len()
    );
    Ok(catalog)
}

pub fn get_catalog() -> Result<&'static Catalog, CatalogError> {
    CATALOG.get_or_try_init(Catalog::from_fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let catalog = Catalog::from_fixtures().unwrap();
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.suppliers().len(), 5);
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.inventory().len(), 8);
    }

    #[test]
    fn test_products_have_relations() {
        let catalog = Catalog::from_fixtures().unwrap();
        let laptop = catalog.product_by_id(1).unwrap();
        assert_eq!(laptop.category_name(), "Electronics");
        assert_eq!(laptop.supplier_name(), "TechSupply Co.");
    }

    #[test]
    fn test_inventory_product_has_category() {
        let catalog = Catalog::from_fixtures().unwrap();
        let item = catalog.inventory_by_id(3).unwrap();
        let product = item.product.unwrap();
        assert_eq!(product.name, "Smart Coffee Maker");
        assert_eq!(product.category_name(), "Home & Kitchen");
    }

    #[test]
    fn test_missing_relation_stays_empty() {
        let catalog = Catalog::from_json(
            r#"{
                "categories": [],
                "suppliers": [],
                "products": [{ "id": 1, "name": "Orphan", "description": null, "price": 1.0,
                    "category_id": 9, "supplier_id": 9, "created_at": "2023-05-10T14:30:00Z" }],
                "inventory": []
            }"#,
        )
        .unwrap();
        let orphan = catalog.product_by_id(1).unwrap();
        assert!(orphan.category.is_none());
        assert_eq!(orphan.category_name(), "N/A");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let catalog = Catalog::from_fixtures().unwrap();
        let err = catalog.supplier_by_id(42).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound {
                entity: "supplier",
                id: 42
            }
        ));
        assert_eq!(err.to_string(), "supplier with id 42 not found");
    }

    #[test]
    fn test_dashboard_from_fixtures() {
        let summary = Catalog::from_fixtures().unwrap().dashboard();
        assert_eq!(summary.total_products, 8);
        assert_eq!(summary.total_inventory, 625);
        // 25 < 30, а 30 на границе не попадает
        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.recent_products[0].name, "Stainless Steel Cookware Set");
    }

    #[test]
    fn test_broken_fixtures_are_reported() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Fixtures(_))
        ));
    }
}
