use crate::shared::picker::{EntryRow, PickerFlow, PickerItem, RowBuilder};
use contracts::domain::a004_product::ProductCard;
use leptos::prelude::*;

/// One product of a restock batch (`batch_*[]` form fields)
#[derive(Clone, Debug, PartialEq)]
pub struct BatchEntryRow {
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub purchase_rate: String,
    pub sale_price: String,
}

impl EntryRow for BatchEntryRow {
    fn product_id(&self) -> &str {
        &self.product_id
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BatchRowBuilder;

impl RowBuilder for BatchRowBuilder {
    type Item = ProductCard;
    type Row = BatchEntryRow;

    /// Rates are pre-filled from the product's last batch; quantity starts empty.
    fn build_row(&self, item: &ProductCard) -> BatchEntryRow {
        BatchEntryRow {
            product_id: item.id.clone(),
            product_name: item.display_name(),
            quantity: String::new(),
            purchase_rate: item.purchase_rate_text(),
            sale_price: item.sale_price_text(),
        }
    }

    /// Name or category name. The newline keeps a query from matching across both.
    fn search_key(&self, item: &ProductCard) -> String {
        format!(
            "{}\n{}",
            item.name.to_lowercase(),
            item.category_name.as_deref().unwrap_or_default().to_lowercase()
        )
    }
}

pub type RestockFlow = PickerFlow<BatchRowBuilder>;

pub fn create_state() -> RwSignal<RestockFlow> {
    RwSignal::new(PickerFlow::new(BatchRowBuilder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::picker::PickerStage;

    fn products() -> Vec<ProductCard> {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "Basmati Rice 5kg", "category_name": "Grains", "purchase_rate": 1000, "sale_price": 1250},
                {"id": 2, "name": "Cooking Oil", "category_name": "Oils"},
                {"id": 3, "name": "Corn Flakes", "category_name": "Breakfast"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_carry_server_defaults() {
        let mut flow = PickerFlow::new(BatchRowBuilder);
        flow.open();
        flow.set_checked("1", true);
        flow.set_checked("2", true);
        assert_eq!(flow.prepare(&products()), Ok(2));
        assert_eq!(flow.stage(), PickerStage::Prepared);

        let rows = flow.rows();
        assert_eq!(rows[0].purchase_rate, "1000.00");
        assert_eq!(rows[0].sale_price, "1250.00");
        assert_eq!(rows[0].quantity, "");
        assert_eq!(rows[1].purchase_rate, "");
        assert_eq!(rows[1].product_name, "Cooking Oil");
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let mut flow = PickerFlow::new(BatchRowBuilder);
        let items = products();

        let outcome = flow.search(&items, "oil");
        assert_eq!(outcome.visible, vec![false, true, false]);

        let outcome = flow.search(&items, "GRAINS");
        assert_eq!(outcome.visible, vec![true, false, false]);
        assert_eq!(flow.hint().text(), "Showing 1 product(s)");

        // does not match across name and category
        let outcome = flow.search(&items, "flakes break");
        assert_eq!(outcome.visible_count, 0);
        assert_eq!(flow.hint().text(), "No products match this search.");
    }
}
