use serde::{Deserialize, Serialize};

/// Сводка по партиям поставки за одну дату
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBatchSummary {
    pub batch_date: String,
    #[serde(default)]
    pub product_count: u32,
    #[serde(default)]
    pub total_purchase: f64,
}
