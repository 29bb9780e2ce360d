use crate::domain::common::{deserialize_id, deserialize_opt_id};
use serde::{Deserialize, Serialize};

/// Порог «мало на складе», если сервер не прислал свой
pub const DEFAULT_REORDER_LEVEL: u32 = 3;

fn default_reorder_level() -> u32 {
    DEFAULT_REORDER_LEVEL
}

// ============================================================================
// Stock status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn for_quantity(quantity: u32, reorder_level: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "out_of_stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }

    pub fn all() -> [StockStatus; 3] {
        [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    }
}

// ============================================================================
// Product card
// ============================================================================

/// Товар магазина вместе с последними ценами из партий поставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,

    #[serde(default)]
    pub quantity: u32,
    #[serde(default = "default_reorder_level")]
    pub reorder_level: u32,
    #[serde(default)]
    pub price: f64,

    /// Закупочная цена последней партии
    #[serde(default)]
    pub purchase_rate: Option<f64>,
    /// Цена продажи по умолчанию
    #[serde(default)]
    pub sale_price: Option<f64>,
}

impl ProductCard {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity, self.reorder_level)
    }

    /// Default purchase rate as an input value ("" when unknown).
    pub fn purchase_rate_text(&self) -> String {
        money_input_text(self.purchase_rate)
    }

    /// Default sale price as an input value ("" when unknown).
    pub fn sale_price_text(&self) -> String {
        money_input_text(self.sale_price)
    }
}

fn money_input_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::for_quantity(0, 3), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(3, 3), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(4, 3), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_wire_names() {
        for status in StockStatus::all() {
            assert_eq!(StockStatus::from_wire(status.as_str()), Some(status));
        }
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"low_stock\"");
    }

    #[test]
    fn test_product_defaults_from_sparse_json() {
        let p: ProductCard =
            serde_json::from_str(r#"{"id": 7, "name": "Basmati Rice 5kg", "purchase_rate": 1000}"#)
                .unwrap();
        assert_eq!(p.id, "7");
        assert_eq!(p.reorder_level, DEFAULT_REORDER_LEVEL);
        assert_eq!(p.stock_status(), StockStatus::OutOfStock);
        assert_eq!(p.purchase_rate_text(), "1000.00");
        assert_eq!(p.sale_price_text(), "");
    }
}
