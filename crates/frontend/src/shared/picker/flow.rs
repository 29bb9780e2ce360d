//! Multi-select picker flow shared by restock and sale entry.
//!
//! `Idle → Picking → Prepared`, and `reset` goes back to `Picking` with the
//! rows discarded. The checklist keeps its ticks across resets.

use super::traits::{EntryRow, PickerItem, RowBuilder};
use crate::shared::list_utils::{normalize_query, search, SearchOutcome};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerStage {
    #[default]
    Idle,
    Picking,
    Prepared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionHint {
    /// Nothing computed yet, the view shows its static help text.
    Blank,
    /// Search query present, `n` items match.
    Matching(usize),
    NoMatch,
    /// Empty query, `n` items listed.
    Available(usize),
    /// Prepare was attempted with nothing ticked, or the list is empty.
    PickAtLeastOne,
    Selected(usize),
}

impl SelectionHint {
    pub fn text(&self) -> String {
        match self {
            SelectionHint::Blank => String::new(),
            SelectionHint::Matching(n) => format!("Showing {n} product(s)"),
            SelectionHint::NoMatch => "No products match this search.".to_string(),
            SelectionHint::Available(n) => format!("{n} product(s) available"),
            SelectionHint::PickAtLeastOne => "Pick at least one product to continue.".to_string(),
            SelectionHint::Selected(n) => format!("{n} product(s) selected."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("pick at least one product to continue")]
    EmptySelection,
}

#[derive(Clone)]
pub struct PickerFlow<B: RowBuilder> {
    builder: B,
    stage: PickerStage,
    checked: Vec<String>,
    rows: Vec<B::Row>,
    query: String,
    hint: SelectionHint,
    hint_is_error: bool,
}

impl<B: RowBuilder> PickerFlow<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            stage: PickerStage::Idle,
            checked: Vec::new(),
            rows: Vec::new(),
            query: String::new(),
            hint: SelectionHint::Blank,
            hint_is_error: false,
        }
    }

    pub fn stage(&self) -> PickerStage {
        self.stage
    }

    pub fn rows(&self) -> &[B::Row] {
        &self.rows
    }

    pub fn row_mut(&mut self, product_id: &str) -> Option<&mut B::Row> {
        self.rows.iter_mut().find(|r| r.product_id() == product_id)
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hint(&self) -> &SelectionHint {
        &self.hint
    }

    pub fn hint_is_error(&self) -> bool {
        self.hint_is_error
    }

    /// Idle → Picking. From any other stage the picker is just shown again.
    pub fn open(&mut self) {
        if self.stage == PickerStage::Idle {
            self.stage = PickerStage::Picking;
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        let present = self.is_checked(id);
        if checked && !present {
            self.checked.push(id.to_string());
        } else if !checked && present {
            self.checked.retain(|c| c != id);
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.iter().any(|c| c == id)
    }

    /// Ticked ids in the order they were ticked.
    pub fn checked_ids(&self) -> &[String] {
        &self.checked
    }

    /// Replaces the ticks with exactly `ids`.
    pub fn check_only<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.checked.clear();
        for id in ids {
            self.set_checked(id, true);
        }
    }

    /// Ticked items in checklist order.
    pub fn checked_items<'a>(&self, items: &'a [B::Item]) -> Vec<&'a B::Item> {
        items.iter().filter(|i| self.is_checked(&i.id())).collect()
    }

    /// Filters the checklist and refreshes the hint.
    pub fn search(&mut self, items: &[B::Item], query: &str) -> SearchOutcome {
        self.query = query.to_string();
        let outcome = search(items, query, |i| self.builder.search_key(i));
        let visible = outcome.visible_count;
        self.hint = if normalize_query(query).is_empty() {
            if visible > 0 {
                SelectionHint::Available(visible)
            } else {
                SelectionHint::PickAtLeastOne
            }
        } else if visible > 0 {
            SelectionHint::Matching(visible)
        } else {
            SelectionHint::NoMatch
        };
        self.hint_is_error = false;
        outcome
    }

    /// Current visibility of every checklist item for the stored query.
    pub fn visibility(&self, items: &[B::Item]) -> SearchOutcome {
        search(items, &self.query, |i| self.builder.search_key(i))
    }

    /// Builds one fresh row per ticked item. Existing rows are discarded.
    pub fn prepare(&mut self, items: &[B::Item]) -> Result<usize, PickerError> {
        let picked = self.checked_items(items);
        if picked.is_empty() {
            self.hint = SelectionHint::PickAtLeastOne;
            self.hint_is_error = true;
            return Err(PickerError::EmptySelection);
        }
        let rows: Vec<B::Row> = picked.into_iter().map(|i| self.builder.build_row(i)).collect();
        let count = rows.len();
        self.rows = rows;
        self.hint = SelectionHint::Selected(count);
        self.hint_is_error = false;
        self.stage = PickerStage::Prepared;
        Ok(count)
    }

    /// Drops the rows and goes back to picking.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.stage = PickerStage::Picking;
    }

    pub fn set_hint(&mut self, hint: SelectionHint) {
        self.hint = hint;
        self.hint_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        id: &'static str,
        name: &'static str,
        price: &'static str,
    }

    impl PickerItem for Item {
        fn id(&self) -> String {
            self.id.to_string()
        }
        fn display_name(&self) -> String {
            self.name.to_string()
        }
        fn search_haystack(&self) -> String {
            self.name.to_lowercase()
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        price: String,
    }

    impl EntryRow for Row {
        fn product_id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Clone)]
    struct Builder;

    impl RowBuilder for Builder {
        type Item = Item;
        type Row = Row;
        fn build_row(&self, item: &Item) -> Row {
            Row {
                id: item.id.to_string(),
                price: item.price.to_string(),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "1", name: "Rice 5kg", price: "900" },
            Item { id: "2", name: "Sugar", price: "150" },
            Item { id: "3", name: "Brown Rice", price: "1200" },
        ]
    }

    #[test]
    fn test_prepare_without_selection_keeps_state() {
        let mut flow = PickerFlow::new(Builder);
        flow.open();
        assert_eq!(flow.prepare(&items()), Err(PickerError::EmptySelection));
        assert_eq!(flow.stage(), PickerStage::Picking);
        assert!(flow.rows().is_empty());
        assert!(flow.hint_is_error());
        assert_eq!(flow.hint().text(), "Pick at least one product to continue.");
    }

    #[test]
    fn test_prepare_builds_rows_in_checklist_order() {
        let mut flow = PickerFlow::new(Builder);
        flow.open();
        flow.set_checked("3", true);
        flow.set_checked("1", true);

        assert_eq!(flow.prepare(&items()), Ok(2));
        assert_eq!(flow.stage(), PickerStage::Prepared);
        let ids: Vec<&str> = flow.rows().iter().map(|r| r.product_id()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(flow.rows()[1].price, "1200");
        assert_eq!(flow.hint().text(), "2 product(s) selected.");
        assert!(!flow.hint_is_error());
    }

    #[test]
    fn test_prepare_again_rebuilds_from_scratch() {
        let mut flow = PickerFlow::new(Builder);
        flow.set_checked("1", true);
        flow.prepare(&items()).unwrap();
        flow.row_mut("1").unwrap().price = "1".to_string();

        flow.set_checked("2", true);
        flow.prepare(&items()).unwrap();
        assert_eq!(flow.rows().len(), 2);
        assert_eq!(flow.rows()[0].price, "900");
    }

    #[test]
    fn test_reset_drops_rows_keeps_ticks() {
        let mut flow = PickerFlow::new(Builder);
        flow.set_checked("2", true);
        flow.prepare(&items()).unwrap();
        flow.reset();
        assert_eq!(flow.stage(), PickerStage::Picking);
        assert!(!flow.has_rows());
        assert!(flow.is_checked("2"));
    }

    #[test]
    fn test_search_hints() {
        let mut flow = PickerFlow::new(Builder);
        let items = items();

        let outcome = flow.search(&items, "rice");
        assert_eq!(outcome.visible_count, 2);
        assert_eq!(flow.hint().text(), "Showing 2 product(s)");

        flow.search(&items, "flour");
        assert_eq!(flow.hint().text(), "No products match this search.");

        flow.search(&items, "  ");
        assert_eq!(flow.hint().text(), "3 product(s) available");

        flow.search(&[], "");
        assert_eq!(flow.hint().text(), "Pick at least one product to continue.");
    }

    #[test]
    fn test_search_does_not_touch_ticks() {
        let mut flow = PickerFlow::new(Builder);
        flow.set_checked("2", true);
        flow.search(&items(), "rice");
        assert!(flow.is_checked("2"));
        assert_eq!(flow.prepare(&items()), Ok(1));
    }

    #[test]
    fn test_check_only_replaces_ticks() {
        let mut flow = PickerFlow::new(Builder);
        flow.set_checked("1", true);
        flow.check_only(["2", "3", "2"]);
        assert_eq!(flow.checked_ids(), &["2".to_string(), "3".to_string()]);
    }
}
