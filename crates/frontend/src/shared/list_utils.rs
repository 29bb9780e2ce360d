//! Shared list helpers: substring search with the "no results" rule, and the search input.
use crate::shared::icons::icon;
use contracts::domain::a001_category::CategoryCard;
use contracts::domain::a002_brand::BrandCard;
use contracts::domain::a003_customer::CustomerRow;
use contracts::domain::a004_product::ProductCard;
use contracts::projections::p900_sales_report::SalesReportCard;
use leptos::html::Input;
use leptos::prelude::*;

/// Types that can be matched by a free-text search.
pub trait Searchable {
    /// Text the query is matched against (case-insensitive).
    fn search_haystack(&self) -> String;
}

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `term` must already be normalized. An empty term matches everything.
pub fn matches_query(haystack: &str, term: &str) -> bool {
    term.is_empty() || haystack.to_lowercase().contains(term)
}

/// Visibility of every item after a search, in item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visible: Vec<bool>,
    pub visible_count: usize,
    /// "No results" is shown only for a non-empty query with zero matches.
    pub show_empty: bool,
}

impl SearchOutcome {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }
}

/// Filter `items` by `query` using `key` to extract the searchable text.
pub fn search<T, F>(items: &[T], query: &str, key: F) -> SearchOutcome
where
    F: Fn(&T) -> String,
{
    let term = normalize_query(query);
    let visible: Vec<bool> = items
        .iter()
        .map(|item| matches_query(&key(item), &term))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    SearchOutcome {
        visible,
        visible_count,
        show_empty: !term.is_empty() && visible_count == 0,
    }
}

/// [`search`] over the items' own [`Searchable`] haystack.
pub fn search_all<T: Searchable>(items: &[T], query: &str) -> SearchOutcome {
    search(items, query, T::search_haystack)
}

impl Searchable for CategoryCard {
    fn search_haystack(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for BrandCard {
    fn search_haystack(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for CustomerRow {
    fn search_haystack(&self) -> String {
        CustomerRow::search_haystack(self)
    }
}

impl Searchable for ProductCard {
    fn search_haystack(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for SalesReportCard {
    fn search_haystack(&self) -> String {
        self.report_date.clone()
    }
}

/// Search box bound to a query signal. Filtering runs on every keystroke.
#[component]
pub fn SearchInput(
    /// Текущий запрос
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// HTML id of the input
    #[prop(optional, into)]
    id: String,
    /// Ref for callers that need to focus the input
    #[prop(optional)]
    input_ref: Option<NodeRef<Input>>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);

    view! {
        <div class="search-input">
            <input
                type="search"
                id=id
                node_ref=input_ref
                placeholder=placeholder
                autocomplete="off"
                class=("search-input--active", move || !value.with(|v| v.trim().is_empty()))
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.with(|v| v.is_empty())>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| value.set(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// "No results" notice driven by a [`SearchOutcome`]-derived flag.
#[component]
pub fn EmptyState(
    #[prop(into)]
    show: Signal<bool>,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <p class="empty-state" hidden=move || !show.get()>
            {message}
        </p>
    }
}
