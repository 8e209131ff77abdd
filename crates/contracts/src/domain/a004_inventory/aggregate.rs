use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a003_product::aggregate::Product;

/// Остаток товара на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl Inventory {
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

/// Уровень остатка для бейджа в таблице склада
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Critical,
    Low,
    InStock,
}

impl StockStatus {
    pub const CRITICAL_THRESHOLD: i64 = 10;
    pub const LOW_THRESHOLD: i64 = 30;

    pub fn from_quantity(quantity: i64) -> Self {
        if quantity <= Self::CRITICAL_THRESHOLD {
            StockStatus::Critical
        } else if quantity <= Self::LOW_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Вариант бейджа (см. `Badge` во фронтенде)
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StockStatus::Critical => "error",
            StockStatus::Low => "warning",
            StockStatus::InStock => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::Critical);
        assert_eq!(StockStatus::from_quantity(10), StockStatus::Critical);
        assert_eq!(StockStatus::from_quantity(11), StockStatus::Low);
        assert_eq!(StockStatus::from_quantity(30), StockStatus::Low);
        assert_eq!(StockStatus::from_quantity(31), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_labels() {
        assert_eq!(StockStatus::Critical.label(), "Critical");
        assert_eq!(StockStatus::InStock.badge_variant(), "success");
    }
}
