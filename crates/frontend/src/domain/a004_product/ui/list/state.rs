use crate::shared::config::PRODUCT_PAGE_SIZE;
use crate::shared::list_utils::{matches_query, normalize_query};
use crate::shared::pagination::{paginate, PageSlice, PageState};
use contracts::domain::a004_product::{ProductCard, StockStatus};
use leptos::prelude::*;

/// Product grid filters. Empty strings / `None` mean "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilters {
    pub query: String,
    pub category_id: String,
    pub brand_id: String,
    pub stock: Option<StockStatus>,
}

impl ProductFilters {
    pub fn any_active(&self) -> bool {
        !normalize_query(&self.query).is_empty()
            || !self.category_id.is_empty()
            || !self.brand_id.is_empty()
            || self.stock.is_some()
    }

    /// All four predicates must hold.
    pub fn matches(&self, product: &ProductCard) -> bool {
        let term = normalize_query(&self.query);
        let category_ok = self.category_id.is_empty()
            || product.category_id.as_deref() == Some(self.category_id.as_str());
        let brand_ok =
            self.brand_id.is_empty() || product.brand_id.as_deref() == Some(self.brand_id.as_str());
        let stock_ok = self.stock.map_or(true, |s| product.stock_status() == s);

        matches_query(&product.name, &term) && category_ok && brand_ok && stock_ok
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    pub filters: ProductFilters,
    pub page: PageState,
    /// Set by the first filter interaction; the empty notice waits for it.
    pub touched: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            filters: ProductFilters::default(),
            page: PageState::new(PRODUCT_PAGE_SIZE),
            touched: false,
        }
    }
}

impl ProductListState {
    fn changed(&mut self) {
        self.touched = true;
        self.page.reset();
    }

    pub fn set_query(&mut self, query: String) {
        self.filters.query = query;
        self.changed();
    }

    pub fn set_category(&mut self, category_id: String) {
        self.filters.category_id = category_id;
        self.changed();
    }

    pub fn set_brand(&mut self, brand_id: String) {
        self.filters.brand_id = brand_id;
        self.changed();
    }

    pub fn set_stock(&mut self, stock: Option<StockStatus>) {
        self.filters.stock = stock;
        self.changed();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductPage {
    pub shown: Vec<bool>,
    pub slice: PageSlice,
    pub show_empty: bool,
    pub count_label: String,
    /// The whole result fits on one page.
    pub hide_pagination: bool,
}

impl ProductPage {
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }
}

/// "No products match these filters." / "Showing 13-24 of 30 products." / "Showing 5 products."
pub fn count_label(slice: &PageSlice, page_size: usize) -> String {
    match slice.total {
        0 => "No products match these filters.".to_string(),
        total if total > page_size => format!(
            "Showing {}-{} of {} products.",
            slice.start + 1,
            slice.end,
            total
        ),
        1 => "Showing 1 product.".to_string(),
        total => format!("Showing {total} products."),
    }
}

pub fn product_page(products: &[ProductCard], state: &ProductListState) -> ProductPage {
    let matched: Vec<bool> = products.iter().map(|p| state.filters.matches(p)).collect();
    let total = matched.iter().filter(|m| **m).count();
    let slice = paginate(total, state.page.current_page, state.page.page_size);

    let mut position = 0;
    let shown = matched
        .iter()
        .map(|&m| {
            if !m {
                return false;
            }
            let on_page = slice.contains(position);
            position += 1;
            on_page
        })
        .collect();

    ProductPage {
        shown,
        slice,
        show_empty: state.touched && state.filters.any_active() && total == 0,
        count_label: count_label(&slice, state.page.page_size),
        hide_pagination: total <= state.page.page_size,
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
