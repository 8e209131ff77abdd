use serde::{Deserialize, Serialize};

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Описание для списков, с подстановкой при отсутствии
    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description".to_string())
    }
}
