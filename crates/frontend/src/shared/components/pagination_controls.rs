use crate::shared::icons::icon;
use crate::shared::pagination::PageSlice;
use leptos::prelude::*;

/// Prev/Next buttons around a page label.
///
/// Buttons are disabled at the respective boundary of `slice`.
#[component]
pub fn PaginationControls(
    /// Current slice of the list
    #[prop(into)]
    slice: Signal<PageSlice>,
    /// Label shown between the buttons
    #[prop(into)]
    label: Signal<String>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    /// Hide the whole bar
    #[prop(into)]
    hidden: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls" hidden=move || hidden.get()>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !slice.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || label.get()}</span>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !slice.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
