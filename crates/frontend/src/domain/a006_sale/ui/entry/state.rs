use crate::shared::number_format::format_price;
use crate::shared::picker::{EntryRow, PickerFlow, PickerItem, RowBuilder};
use contracts::domain::a004_product::ProductCard;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    #[error("This product has no purchase rate yet. Add a restock purchase price first.")]
    MissingPurchaseRate,
}

/// Price that recovers the purchase rate plus the shop's expense percent.
///
/// `None` when the rate is unknown; with a non-positive percent the rate itself.
pub fn expense_price(purchase_rate: Option<f64>, expense_percent: f64) -> Option<String> {
    let base = purchase_rate.filter(|r| r.is_finite())?;
    if expense_percent <= 0.0 {
        return Some(format_price(base));
    }
    Some(format_price(base * (1.0 + expense_percent / 100.0)))
}

/// One product of a sale (`sale_*[]` form fields)
#[derive(Clone, Debug, PartialEq)]
pub struct SaleEntryRow {
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    expense: bool,
    /// Price typed before expense pricing locked the field
    remembered_price: Option<String>,
    default_price: String,
    purchase_rate: Option<f64>,
}

impl SaleEntryRow {
    pub fn uses_expense(&self) -> bool {
        self.expense
    }

    /// Hidden `sale_expense[]` value.
    pub fn expense_flag(&self) -> &'static str {
        if self.expense {
            "1"
        } else {
            "0"
        }
    }

    /// The price input is read-only while expense pricing is on.
    pub fn price_locked(&self) -> bool {
        self.expense
    }

    /// Turns expense pricing on or off.
    ///
    /// Enabling without a known purchase rate fails and leaves the row untouched.
    pub fn set_expense(&mut self, enabled: bool, expense_percent: f64) -> Result<(), ExpenseError> {
        if enabled {
            let derived = expense_price(self.purchase_rate, expense_percent)
                .ok_or(ExpenseError::MissingPurchaseRate)?;
            if !self.expense {
                let typed = if self.price.is_empty() {
                    self.default_price.clone()
                } else {
                    self.price.clone()
                };
                self.remembered_price = Some(typed);
            }
            self.price = derived;
            self.expense = true;
        } else if self.expense {
            self.price = self
                .remembered_price
                .take()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| self.default_price.clone());
            self.expense = false;
        }
        Ok(())
    }
}

impl EntryRow for SaleEntryRow {
    fn product_id(&self) -> &str {
        &self.product_id
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SaleRowBuilder;

impl RowBuilder for SaleRowBuilder {
    type Item = ProductCard;
    type Row = SaleEntryRow;

    fn build_row(&self, item: &ProductCard) -> SaleEntryRow {
        let default_price = item.sale_price_text();
        SaleEntryRow {
            product_id: item.id.clone(),
            product_name: item.display_name(),
            quantity: String::new(),
            price: default_price.clone(),
            expense: false,
            remembered_price: None,
            default_price,
            purchase_rate: item.purchase_rate,
        }
    }
}

pub type SaleFlow = PickerFlow<SaleRowBuilder>;

pub fn create_state() -> RwSignal<SaleFlow> {
    RwSignal::new(PickerFlow::new(SaleRowBuilder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(purchase_rate: Option<f64>, sale_price: Option<f64>) -> SaleEntryRow {
        let product = ProductCard {
            id: "7".into(),
            name: "Basmati Rice 5kg".into(),
            category_id: None,
            category_name: None,
            brand_id: None,
            brand_name: None,
            quantity: 12,
            reorder_level: 3,
            price: 1250.0,
            purchase_rate,
            sale_price,
        };
        SaleRowBuilder.build_row(&product)
    }

    #[test]
    fn test_expense_price() {
        assert_eq!(expense_price(Some(1000.0), 10.0).as_deref(), Some("1100.00"));
        assert_eq!(expense_price(Some(1000.0), 0.0).as_deref(), Some("1000.00"));
        assert_eq!(expense_price(Some(99.5), -5.0).as_deref(), Some("99.50"));
        assert_eq!(expense_price(None, 10.0), None);
        assert_eq!(expense_price(Some(f64::NAN), 10.0), None);
    }

    #[test]
    fn test_toggle_on_and_off_restores_typed_price() {
        let mut r = row(Some(1000.0), Some(1250.0));
        assert_eq!(r.price, "1250.00");
        r.price = "1300".into();

        r.set_expense(true, 10.0).unwrap();
        assert_eq!(r.price, "1100.00");
        assert!(r.price_locked());
        assert_eq!(r.expense_flag(), "1");

        r.set_expense(false, 10.0).unwrap();
        assert_eq!(r.price, "1300");
        assert!(!r.price_locked());
        assert_eq!(r.expense_flag(), "0");
    }

    #[test]
    fn test_toggle_off_falls_back_to_default_price() {
        let mut r = row(Some(1000.0), Some(1250.0));
        r.price.clear();
        r.set_expense(true, 0.0).unwrap();
        assert_eq!(r.price, "1000.00");
        r.set_expense(false, 0.0).unwrap();
        assert_eq!(r.price, "1250.00");
    }

    #[test]
    fn test_missing_purchase_rate_is_rejected() {
        let mut r = row(None, Some(1250.0));
        let before = r.clone();
        assert_eq!(r.set_expense(true, 10.0), Err(ExpenseError::MissingPurchaseRate));
        assert_eq!(r, before);
        assert_eq!(r.expense_flag(), "0");
        assert_eq!(
            ExpenseError::MissingPurchaseRate.to_string(),
            "This product has no purchase rate yet. Add a restock purchase price first."
        );
    }

    #[test]
    fn test_enabling_twice_keeps_first_remembered_price() {
        let mut r = row(Some(200.0), Some(260.0));
        r.set_expense(true, 10.0).unwrap();
        r.set_expense(true, 10.0).unwrap();
        r.set_expense(false, 10.0).unwrap();
        assert_eq!(r.price, "260.00");
    }
}
