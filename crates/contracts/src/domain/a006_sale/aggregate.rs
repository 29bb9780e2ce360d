use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    Sale,
    Return,
}

/// Строка проданного товара; источник данных для возврата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub product_id: String,
    pub product_name: String,
    /// Продано штук
    pub quantity: i64,
    /// Уже возвращено штук
    #[serde(default)]
    pub returned_quantity: i64,
    pub unit_price: f64,
}

impl SaleLineItem {
    /// Units that can still be returned, clamped into `[0, quantity]`.
    pub fn remaining_quantity(&self) -> i64 {
        let sold = self.quantity.max(0);
        (sold - self.returned_quantity).clamp(0, sold)
    }
}

/// Продажа (или возврат) с позициями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub sale_type: SaleType,
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i64, returned: i64) -> SaleLineItem {
        SaleLineItem {
            id: "1".into(),
            product_id: "7".into(),
            product_name: "Cooking Oil 1L".into(),
            quantity,
            returned_quantity: returned,
            unit_price: 550.0,
        }
    }

    #[test]
    fn test_remaining_quantity_is_clamped() {
        assert_eq!(line(5, 2).remaining_quantity(), 3);
        assert_eq!(line(5, 5).remaining_quantity(), 0);
        assert_eq!(line(5, 9).remaining_quantity(), 0);
        assert_eq!(line(5, -4).remaining_quantity(), 5);
    }

    #[test]
    fn test_line_item_without_returns() {
        let item: SaleLineItem = serde_json::from_str(
            r#"{"id": 11, "product_id": 7, "product_name": "Tea 950g", "quantity": 2, "unit_price": 1250.0}"#,
        )
        .unwrap();
        assert_eq!(item.returned_quantity, 0);
        assert_eq!(item.remaining_quantity(), 2);
    }
}
