use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

/// Бренд в карточке списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCard {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_count: u32,
    /// Страница бренда; карточка без URL не кликабельна
    #[serde(default)]
    pub detail_url: Option<String>,
}
