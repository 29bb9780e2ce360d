//! PageFrame: root wrapper of every section page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element. Sections stay mounted for the life of the page and are only
//! hidden, so picker and filter state survives switching between them.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a006_sale--usecase"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Page title shown in the header.
    title: &'static str,
    /// Hidden when another section is active.
    #[prop(into)]
    hidden: Signal<bool>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");
    debug_assert!(is_known_category(category), "unknown page category {category}");

    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <section
            id=page_id
            class=class
            data-page-category=category
            hidden=move || hidden.get()
        >
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </section>
    }
}
