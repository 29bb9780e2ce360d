use crate::shared::config::CUSTOMER_PAGE_SIZE;
use crate::shared::list_utils::search_all;
use crate::shared::pagination::{page_items, paginate, PageSlice, PageState};
use contracts::domain::a003_customer::CustomerRow;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerListState {
    pub query: String,
    pub page: PageState,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: PageState::new(CUSTOMER_PAGE_SIZE),
        }
    }
}

impl CustomerListState {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page.reset();
    }
}

/// Rows shown on the current page, in payload order.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerPage {
    pub shown: Vec<bool>,
    pub slice: PageSlice,
}

impl CustomerPage {
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }
}

/// Filters by name + phone, then pages over the matches.
pub fn customer_page(customers: &[CustomerRow], state: &CustomerListState) -> CustomerPage {
    let outcome = search_all(customers, &state.query);
    let slice = paginate(
        outcome.visible_count,
        state.page.current_page,
        state.page.page_size,
    );

    let matches = outcome.visible_indices();
    let (on_page, _) = page_items(&matches, slice.page, state.page.page_size);
    let mut shown = vec![false; customers.len()];
    for &index in on_page {
        shown[index] = true;
    }

    CustomerPage { shown, slice }
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers(n: usize) -> Vec<CustomerRow> {
        (1..=n)
            .map(|i| CustomerRow {
                id: i.to_string(),
                name: format!("Customer {i}"),
                phone: Some(format!("0300-{i:07}")),
            })
            .collect()
    }

    #[test]
    fn test_first_page_of_many() {
        let list = customers(23);
        let page = customer_page(&list, &CustomerListState::default());
        assert_eq!(page.shown.iter().filter(|s| **s).count(), 10);
        assert!(page.is_shown(0) && page.is_shown(9) && !page.is_shown(10));
        assert_eq!(page.slice.showing_label(), "Showing 1-10 of 23");
        assert!(!page.slice.has_prev());
        assert!(page.slice.has_next());
    }

    #[test]
    fn test_last_page_is_partial() {
        let list = customers(23);
        let mut state = CustomerListState::default();
        state.page.next(23);
        state.page.next(23);
        state.page.next(23);
        assert_eq!(state.page.current_page, 3);

        let page = customer_page(&list, &state);
        assert_eq!(page.slice.showing_label(), "Showing 21-23 of 23");
        assert!(page.is_shown(22));
        assert!(!page.slice.has_next());
    }

    #[test]
    fn test_query_resets_page_and_pages_over_matches() {
        let list = customers(23);
        let mut state = CustomerListState::default();
        state.page.next(23);
        state.set_query("Customer 2".to_string());
        assert_eq!(state.page.current_page, 1);

        // "Customer 2" and "Customer 20".."Customer 23"
        let page = customer_page(&list, &state);
        assert_eq!(page.slice.total, 5);
        assert_eq!(page.slice.showing_label(), "Showing 1-5 of 5");
        assert!(page.is_shown(1));
        assert!(!page.is_shown(0));
    }

    #[test]
    fn test_phone_search_and_no_matches() {
        let list = customers(3);
        let mut state = CustomerListState::default();
        state.set_query("0300-0000002".to_string());
        assert_eq!(customer_page(&list, &state).slice.total, 1);

        state.set_query("nobody".to_string());
        let page = customer_page(&list, &state);
        assert_eq!(page.slice.showing_label(), "Showing 0 of 0");
        assert!(!page.slice.has_prev() && !page.slice.has_next());
    }
}
