pub mod state;

use crate::shared::dom::focus_input;
use crate::shared::icons::icon;
use crate::shared::list_utils::{search_all, EmptyState, SearchInput};
use crate::shared::modal::{ModalFrame, ModalId, ModalRegistry};
use crate::shared::page_data::use_page_data;
use leptos::html::Input;
use leptos::prelude::*;

/// Resets the search, shows the picker and focuses the search box.
pub fn open_customer_picker(
    modals: ModalRegistry,
    query: RwSignal<String>,
    search_ref: NodeRef<Input>,
) {
    query.set(String::new());
    modals.open(ModalId::CustomerPicker);
    focus_input(search_ref);
}

/// Customer list modal. Each row selects the customer through `on_select`.
#[component]
pub fn CustomerPickerModal(
    query: RwSignal<String>,
    search_ref: NodeRef<Input>,
    on_select: Callback<String>,
    /// Opens the create-customer dialog
    on_create: Callback<()>,
) -> impl IntoView {
    let page_data = use_page_data();
    let customers = StoredValue::new(page_data.with(|p| p.customers.clone()));

    let outcome = Memo::new(move |_| {
        let q = query.get();
        customers.with_value(|c| search_all(c, &q))
    });

    let options = customers.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, customer)| {
                let id = customer.id.clone();
                view! {
                    <button
                        type="button"
                        class="customer-option"
                        hidden=move || !outcome.with(|o| o.is_visible(idx))
                        on:click=move |_| on_select.run(id.clone())
                    >
                        <strong>{customer.name.clone()}</strong>
                        <small>{customer.phone.clone().unwrap_or_default()}</small>
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <ModalFrame id=ModalId::CustomerPicker title="Select customer".to_string()>
            <SearchInput
                value=query
                placeholder="Search by name or phone"
                id="customerPickerSearch"
                input_ref=search_ref
            />
            <div class="customer-picker__list">{options}</div>
            <EmptyState
                show=Signal::derive(move || outcome.with(|o| o.show_empty))
                message="No customers match this search."
            />
            <div class="modal-actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_create.run(())
                >
                    {icon("plus")}
                    " New customer"
                </button>
            </div>
        </ModalFrame>
    }
}
