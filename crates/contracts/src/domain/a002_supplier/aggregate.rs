use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    pub fn contact_or_default(&self) -> String {
        self.contact_info
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "No contact information".to_string())
    }
}
