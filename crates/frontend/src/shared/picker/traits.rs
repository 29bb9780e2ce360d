/// Product that can be ticked in a picker checklist
pub trait PickerItem {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
    /// Lowercased text the picker search matches against.
    fn search_haystack(&self) -> String;
}

/// Entry row prepared from a picked item
pub trait EntryRow {
    fn product_id(&self) -> &str;
}

/// Seeds a fresh entry row with the server defaults of an item.
pub trait RowBuilder {
    type Item: PickerItem;
    type Row: EntryRow + Clone;

    fn build_row(&self, item: &Self::Item) -> Self::Row;

    /// Text the checklist search matches against for this flow.
    fn search_key(&self, item: &Self::Item) -> String {
        item.search_haystack()
    }
}

impl PickerItem for contracts::domain::a004_product::ProductCard {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            "Product".to_string()
        } else {
            self.name.clone()
        }
    }

    fn search_haystack(&self) -> String {
        self.name.to_lowercase()
    }
}
