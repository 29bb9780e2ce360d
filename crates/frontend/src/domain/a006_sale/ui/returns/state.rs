use contracts::domain::a006_sale::SaleLineItem;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// Missing sale id or no line items; the click is ignored
    #[error("nothing to return")]
    NothingToReturn,
    #[error("All items from this sale have already been returned.")]
    FullyReturned,
}

/// Line item that can still be (partly) returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnItem {
    pub sale_item_id: String,
    pub product_name: String,
    pub sold_quantity: i64,
    pub remaining_quantity: i64,
    pub unit_price: f64,
    pub selected: bool,
    /// Input text of the quantity field
    pub quantity: String,
}

impl ReturnItem {
    fn from_line(line: &SaleLineItem, selected: bool) -> Self {
        let remaining = line.remaining_quantity();
        Self {
            sale_item_id: line.id.clone(),
            product_name: line.product_name.clone(),
            sold_quantity: line.quantity.max(0),
            remaining_quantity: remaining,
            unit_price: line.unit_price,
            selected,
            quantity: remaining.to_string(),
        }
    }

    pub fn quantity_label(&self) -> String {
        if self.remaining_quantity == self.sold_quantity {
            format!("Return quantity (max {})", self.sold_quantity)
        } else {
            format!(
                "Return quantity (left {} of {})",
                self.remaining_quantity, self.sold_quantity
            )
        }
    }

    /// Fields of an unchecked row are disabled and not submitted.
    pub fn fields_disabled(&self) -> bool {
        !self.selected
    }
}

/// Drops fully returned lines, keeps the order of the rest.
pub fn eligible_items(lines: &[SaleLineItem]) -> Vec<ReturnItem> {
    lines
        .iter()
        .filter(|line| line.remaining_quantity() > 0)
        .map(|line| ReturnItem::from_line(line, false))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnScope {
    /// "Return sale": every line, nothing checked
    WholeSale,
    /// Per-item "Return": the line opens already checked
    SingleItem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSession {
    pub sale_id: String,
    pub items: Vec<ReturnItem>,
    pub confirmed: bool,
}

impl ReturnSession {
    pub fn open(
        sale_id: &str,
        lines: &[SaleLineItem],
        scope: ReturnScope,
    ) -> Result<Self, ReturnError> {
        if sale_id.trim().is_empty() || lines.is_empty() {
            return Err(ReturnError::NothingToReturn);
        }
        let mut items = eligible_items(lines);
        if items.is_empty() {
            return Err(ReturnError::FullyReturned);
        }
        let preselect = scope == ReturnScope::SingleItem;
        for item in &mut items {
            item.selected = preselect;
        }
        Ok(Self {
            sale_id: sale_id.to_string(),
            items,
            confirmed: false,
        })
    }

    pub fn item_mut(&mut self, sale_item_id: &str) -> Option<&mut ReturnItem> {
        self.items.iter_mut().find(|i| i.sale_item_id == sale_item_id)
    }

    pub fn set_selected(&mut self, sale_item_id: &str, selected: bool) {
        if let Some(item) = self.item_mut(sale_item_id) {
            item.selected = selected;
        }
    }

    pub fn set_quantity(&mut self, sale_item_id: &str, quantity: String) {
        if let Some(item) = self.item_mut(sale_item_id) {
            item.quantity = quantity;
        }
    }

    pub fn any_selected(&self) -> bool {
        self.items.iter().any(|i| i.selected)
    }

    pub fn can_submit(&self) -> bool {
        self.confirmed && self.any_selected()
    }
}

pub fn create_state() -> RwSignal<Option<ReturnSession>> {
    RwSignal::new(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: i64, returned: i64) -> SaleLineItem {
        SaleLineItem {
            id: id.into(),
            product_id: format!("p{id}"),
            product_name: format!("Item {id}"),
            quantity,
            returned_quantity: returned,
            unit_price: 250.0,
        }
    }

    #[test]
    fn test_fully_returned_lines_are_excluded() {
        let items = eligible_items(&[line("1", 5, 5), line("2", 5, 2)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sale_item_id, "2");
        assert_eq!(items[0].remaining_quantity, 3);
        assert_eq!(items[0].quantity, "3");
        assert_eq!(items[0].quantity_label(), "Return quantity (left 3 of 5)");
    }

    #[test]
    fn test_untouched_line_label_shows_max() {
        let items = eligible_items(&[line("1", 4, 0)]);
        assert_eq!(items[0].quantity_label(), "Return quantity (max 4)");
    }

    #[test]
    fn test_open_rejects_empty_input() {
        assert_eq!(
            ReturnSession::open("", &[line("1", 1, 0)], ReturnScope::WholeSale),
            Err(ReturnError::NothingToReturn)
        );
        assert_eq!(
            ReturnSession::open("12", &[], ReturnScope::WholeSale),
            Err(ReturnError::NothingToReturn)
        );
    }

    #[test]
    fn test_open_fully_returned_sale() {
        let err = ReturnSession::open("12", &[line("1", 2, 2)], ReturnScope::WholeSale)
            .unwrap_err();
        assert_eq!(err, ReturnError::FullyReturned);
        assert_eq!(err.to_string(), "All items from this sale have already been returned.");
    }

    #[test]
    fn test_scope_controls_preselection() {
        let whole = ReturnSession::open("12", &[line("1", 2, 0), line("2", 1, 0)], ReturnScope::WholeSale)
            .unwrap();
        assert!(whole.items.iter().all(ReturnItem::fields_disabled));

        let single = ReturnSession::open("12", &[line("2", 1, 0)], ReturnScope::SingleItem).unwrap();
        assert!(single.items[0].selected);
        assert!(!single.confirmed);
    }

    #[test]
    fn test_confirm_gating() {
        let mut session =
            ReturnSession::open("12", &[line("1", 2, 0), line("2", 1, 0)], ReturnScope::WholeSale)
                .unwrap();
        assert!(!session.can_submit());

        session.confirmed = true;
        assert!(!session.can_submit());

        session.set_selected("2", true);
        assert!(session.can_submit());

        session.confirmed = false;
        assert!(!session.can_submit());

        session.confirmed = true;
        session.set_selected("2", false);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_reopen_resets_confirmation() {
        let lines = [line("1", 3, 1)];
        let mut session = ReturnSession::open("12", &lines, ReturnScope::SingleItem).unwrap();
        session.confirmed = true;
        session.set_quantity("1", "1".into());
        let reopened = ReturnSession::open("12", &lines, ReturnScope::SingleItem).unwrap();
        assert!(!reopened.confirmed);
        assert_eq!(reopened.items[0].quantity, "2");
    }
}
