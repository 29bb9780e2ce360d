use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

/// Категория товаров, как она приходит в карточке списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_count: u32,
}
