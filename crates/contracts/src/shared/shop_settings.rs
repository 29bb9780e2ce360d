use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "PKR".to_string()
}

/// Настройки магазина, влияющие на форму продажи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Наценка «продажи по себестоимости», в процентах
    #[serde(default)]
    pub expense_percent: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            expense_percent: 0.0,
            currency: default_currency(),
        }
    }
}

impl ShopSettings {
    /// Non-finite or negative percents behave like zero.
    pub fn effective_expense_percent(&self) -> f64 {
        if self.expense_percent.is_finite() && self.expense_percent > 0.0 {
            self.expense_percent
        } else {
            0.0
        }
    }
}
