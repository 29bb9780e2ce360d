//! Session cache of the sale being entered.
//!
//! Saved right before the create-customer form leaves the page, consumed
//! once when the sale view mounts again.

use super::state::SaleFlow;
use crate::shared::config::SALE_DRAFT_KEY;
use crate::shared::picker::{PickerItem, SelectionHint};
use crate::shared::storage::KeyValueStore;
use contracts::domain::a004_product::ProductCard;
use contracts::shared::sale_draft::{DraftEntry, DraftStage, SaleDraft};

/// Rows win over ticks; nothing picked means no draft.
pub fn build_draft(flow: &SaleFlow, items: &[ProductCard]) -> Option<SaleDraft> {
    if flow.has_rows() {
        let entries = flow
            .rows()
            .iter()
            .filter(|row| !row.product_id.is_empty())
            .map(|row| DraftEntry {
                id: row.product_id.clone(),
                quantity: Some(row.quantity.clone()),
                price: Some(row.price.clone()),
                expense: Some(row.expense_flag().to_string()),
            })
            .collect();
        return SaleDraft::new(DraftStage::Details, entries);
    }

    let entries = flow
        .checked_items(items)
        .into_iter()
        .map(|item| DraftEntry {
            id: item.id(),
            quantity: None,
            price: Some(item.sale_price_text()),
            expense: None,
        })
        .collect();
    SaleDraft::new(DraftStage::Select, entries)
}

/// Stores the current draft, or deletes the stored one when there is nothing to keep.
pub fn save_draft(store: &impl KeyValueStore, flow: &SaleFlow, items: &[ProductCard]) {
    let json = build_draft(flow, items).map(|d| d.to_json());
    match json {
        Some(Ok(json)) => {
            log::debug!("sale draft saved");
            store.set(SALE_DRAFT_KEY, &json);
        }
        Some(Err(e)) => {
            log::warn!("sale draft not saved: {e}");
            store.remove(SALE_DRAFT_KEY);
        }
        None => store.remove(SALE_DRAFT_KEY),
    }
}

/// Reads the stored draft and deletes it. Broken drafts are dropped silently.
pub fn take_draft(store: &impl KeyValueStore) -> Option<SaleDraft> {
    let raw = store.get(SALE_DRAFT_KEY)?;
    store.remove(SALE_DRAFT_KEY);
    match SaleDraft::from_json(&raw) {
        Ok(draft) => Some(draft),
        Err(e) => {
            log::debug!("sale draft discarded: {e}");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Ticks restored, rows not generated.
    Selected(usize),
    /// Rows generated and refilled from the draft.
    Prepared {
        rows: usize,
        /// Rows whose expense pricing could not be re-applied
        expense_rejected: usize,
    },
    /// None of the stored products is in the checklist any more.
    NothingMatched,
}

/// Puts a consumed draft back into the flow.
pub fn restore_draft(
    flow: &mut SaleFlow,
    items: &[ProductCard],
    draft: &SaleDraft,
    expense_percent: f64,
) -> RestoreOutcome {
    let known: Vec<String> = items
        .iter()
        .map(|item| item.id())
        .filter(|id| draft.contains(id))
        .collect();
    flow.check_only(known.iter().map(String::as_str));

    if draft.stage == DraftStage::Select {
        flow.set_hint(SelectionHint::Selected(draft.entries.len()));
        return RestoreOutcome::Selected(draft.entries.len());
    }

    let rows = match flow.prepare(items) {
        Ok(rows) => rows,
        Err(_) => return RestoreOutcome::NothingMatched,
    };

    let mut expense_rejected = 0;
    for id in known {
        let (Some(entry), Some(row)) = (draft.entry(&id), flow.row_mut(&id)) else {
            continue;
        };
        if let Some(quantity) = &entry.quantity {
            row.quantity = quantity.clone();
        }
        if let Some(price) = &entry.price {
            row.price = price.clone();
        }
        if entry.uses_expense() && row.set_expense(true, expense_percent).is_err() {
            expense_rejected += 1;
        }
    }

    RestoreOutcome::Prepared {
        rows,
        expense_rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::SaleRowBuilder;
    use super::*;
    use crate::shared::picker::{PickerFlow, PickerStage};
    use crate::shared::storage::MemoryStore;

    fn products() -> Vec<ProductCard> {
        serde_json::from_str(
            r#"[
                {"id": 7, "name": "Basmati Rice 5kg", "purchase_rate": 1000, "sale_price": 1250},
                {"id": 8, "name": "Sugar 1kg", "sale_price": 160},
                {"id": 9, "name": "Tea 950g", "purchase_rate": 1100, "sale_price": 1400}
            ]"#,
        )
        .unwrap()
    }

    fn flow() -> SaleFlow {
        PickerFlow::new(SaleRowBuilder)
    }

    #[test]
    fn test_empty_flow_has_no_draft_and_clears_store() {
        let store = MemoryStore::new();
        store.set(SALE_DRAFT_KEY, "stale");
        assert_eq!(build_draft(&flow(), &products()), None);

        save_draft(&store, &flow(), &products());
        assert_eq!(store.get(SALE_DRAFT_KEY), None);
    }

    #[test]
    fn test_select_stage_draft() {
        let mut f = flow();
        f.set_checked("9", true);
        f.set_checked("7", true);

        let draft = build_draft(&f, &products()).unwrap();
        assert_eq!(draft.stage, DraftStage::Select);
        let ids: Vec<&str> = draft.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "9"]);
        assert_eq!(draft.entries[0].price.as_deref(), Some("1250.00"));
        assert_eq!(draft.entries[0].quantity, None);
    }

    #[test]
    fn test_details_round_trip_through_store() {
        let items = products();
        let store = MemoryStore::new();

        let mut f = flow();
        f.set_checked("7", true);
        f.set_checked("8", true);
        f.prepare(&items).unwrap();
        {
            let row = f.row_mut("7").unwrap();
            row.quantity = "3".into();
            row.price = "1300".into();
            row.set_expense(true, 10.0).unwrap();
        }
        f.row_mut("8").unwrap().quantity = "2".into();

        save_draft(&store, &f, &items);
        let draft = take_draft(&store).unwrap();
        assert_eq!(store.get(SALE_DRAFT_KEY), None);
        assert_eq!(draft.stage, DraftStage::Details);
        assert_eq!(draft.entry("7").unwrap().expense.as_deref(), Some("1"));

        let mut restored = flow();
        let outcome = restore_draft(&mut restored, &items, &draft, 10.0);
        assert_eq!(
            outcome,
            RestoreOutcome::Prepared {
                rows: 2,
                expense_rejected: 0
            }
        );
        assert_eq!(restored.stage(), PickerStage::Prepared);

        let rice = &restored.rows()[0];
        assert_eq!(rice.quantity, "3");
        assert_eq!(rice.price, "1100.00");
        assert!(rice.uses_expense());
        let sugar = &restored.rows()[1];
        assert_eq!(sugar.quantity, "2");
        assert_eq!(sugar.price, "160.00");
        assert!(!sugar.uses_expense());

        // the price typed before expense pricing comes back on toggle-off
        restored.row_mut("7").unwrap().set_expense(false, 10.0).unwrap();
        assert_eq!(restored.rows()[0].price, "1100.00");
    }

    #[test]
    fn test_restore_exact_wire_draft() {
        let items = products();
        let draft = SaleDraft::from_json(
            r#"{"stage":"details","entries":[{"id":"7","quantity":"3","price":"500","expense":"0"}]}"#,
        )
        .unwrap();

        let mut f = flow();
        f.set_checked("9", true);
        let outcome = restore_draft(&mut f, &items, &draft, 10.0);
        assert_eq!(
            outcome,
            RestoreOutcome::Prepared {
                rows: 1,
                expense_rejected: 0
            }
        );
        assert!(!f.is_checked("9"));
        assert_eq!(f.rows().len(), 1);
        assert_eq!(f.rows()[0].quantity, "3");
        assert_eq!(f.rows()[0].price, "500");
        assert_eq!(f.rows()[0].expense_flag(), "0");
    }

    #[test]
    fn test_restore_select_stage_only_ticks() {
        let items = products();
        let draft = SaleDraft::from_json(
            r#"{"stage":"select","entries":[{"id":8,"price":"160.00"},{"id":"404"}]}"#,
        )
        .unwrap();

        let mut f = flow();
        let outcome = restore_draft(&mut f, &items, &draft, 0.0);
        assert_eq!(outcome, RestoreOutcome::Selected(2));
        assert!(f.is_checked("8"));
        assert!(!f.has_rows());
        assert_eq!(f.hint().text(), "2 product(s) selected.");
    }

    #[test]
    fn test_restore_expense_without_purchase_rate() {
        let items = products();
        let draft = SaleDraft::from_json(
            r#"{"stage":"details","entries":[{"id":"8","quantity":"1","price":"170","expense":"1"}]}"#,
        )
        .unwrap();

        let mut f = flow();
        let outcome = restore_draft(&mut f, &items, &draft, 10.0);
        assert_eq!(
            outcome,
            RestoreOutcome::Prepared {
                rows: 1,
                expense_rejected: 1
            }
        );
        assert_eq!(f.rows()[0].price, "170");
        assert_eq!(f.rows()[0].expense_flag(), "0");
    }

    #[test]
    fn test_restore_with_unknown_products_only() {
        let draft = SaleDraft::from_json(r#"{"stage":"details","entries":[{"id":"404"}]}"#).unwrap();
        let mut f = flow();
        assert_eq!(
            restore_draft(&mut f, &products(), &draft, 0.0),
            RestoreOutcome::NothingMatched
        );
        assert!(!f.has_rows());
    }

    #[test]
    fn test_take_is_single_use_and_drops_garbage() {
        let store = MemoryStore::new();
        let mut f = flow();
        f.set_checked("7", true);
        save_draft(&store, &f, &products());

        assert!(take_draft(&store).is_some());
        assert!(take_draft(&store).is_none());

        store.set(SALE_DRAFT_KEY, "{not json");
        assert!(take_draft(&store).is_none());
        assert_eq!(store.get(SALE_DRAFT_KEY), None);

        store.set(SALE_DRAFT_KEY, r#"{"stage":"select","entries":[]}"#);
        assert!(take_draft(&store).is_none());
        assert!(store.is_empty());
    }
}
