use serde::{Deserialize, Serialize};

use crate::domain::a001_category::aggregate::Category;
use crate::domain::a002_supplier::aggregate::Supplier;
use crate::domain::a003_product::aggregate::Product;
use crate::domain::a004_inventory::aggregate::Inventory;

/// Остаток ниже этого значения попадает в блок "Low Stock Alert"
pub const LOW_STOCK_LIMIT: i64 = 30;

/// Сколько последних товаров показывать на главной
pub const RECENT_PRODUCTS_LIMIT: usize = 5;

/// Сводка для главной страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_suppliers: usize,
    pub total_inventory: i64,
    pub low_stock: Vec<Inventory>,
    pub recent_products: Vec<Product>,
}

impl DashboardSummary {
    pub fn build(
        products: &[Product],
        categories: &[Category],
        suppliers: &[Supplier],
        inventory: &[Inventory],
    ) -> Self {
        let mut recent_products = products.to_vec();
        recent_products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_products.truncate(RECENT_PRODUCTS_LIMIT);

        Self {
            total_products: products.len(),
            total_categories: categories.len(),
            total_suppliers: suppliers.len(),
            total_inventory: inventory.iter().map(|i| i.quantity).sum(),
            low_stock: inventory
                .iter()
                .filter(|i| i.quantity < LOW_STOCK_LIMIT)
                .cloned()
                .collect(),
            recent_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product(id: i64, day: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price: 10.0,
            category_id: 1,
            supplier_id: 1,
            created_at: Utc.with_ymd_and_hms(2023, 5, day, 12, 0, 0).unwrap(),
            category: None,
            supplier: None,
        }
    }

    fn stock(id: i64, quantity: i64) -> Inventory {
        Inventory {
            id,
            product_id: id,
            quantity,
            last_updated: Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap(),
            product: None,
        }
    }

    #[test]
    fn test_build_summary() {
        let products: Vec<Product> = (1..=7).map(|i| product(i, i as u32)).collect();
        let inventory = vec![stock(1, 25), stock(2, 150), stock(3, 30), stock(4, 5)];

        let summary = DashboardSummary::build(&products, &[], &[], &inventory);

        assert_eq!(summary.total_products, 7);
        assert_eq!(summary.total_inventory, 210);
        let low: Vec<i64> = summary.low_stock.iter().map(|i| i.id).collect();
        assert_eq!(low, vec![1, 4]);
        let recent: Vec<i64> = summary.recent_products.iter().map(|p| p.id).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_build_summary_empty() {
        let summary = DashboardSummary::build(&[], &[], &[], &[]);
        assert_eq!(summary.total_inventory, 0);
        assert!(summary.low_stock.is_empty());
        assert!(summary.recent_products.is_empty());
    }
}
