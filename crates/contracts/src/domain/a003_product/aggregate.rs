use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_category::aggregate::Category;
use crate::domain::a002_supplier::aggregate::Supplier;

/// Товар каталога
///
/// `category` и `supplier` заполняются сервером при выдаче списка
/// (связи по `category_id` / `supplier_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
    pub supplier_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
}

impl Product {
    pub fn category_name(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn supplier_name(&self) -> String {
        self.supplier
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
