pub mod state;

use self::state::{create_state, customer_page};
use crate::layout::global_context::{use_manager, Section};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;

#[component]
pub fn CustomerList(
    /// Picks the customer for the sale being entered
    on_select: Callback<String>,
) -> impl IntoView {
    let manager = use_manager();
    let page_data = use_page_data();
    let customers = StoredValue::new(page_data.with(|p| p.customers.clone()));

    let state = create_state();
    let query = RwSignal::new(String::new());

    Effect::watch(
        move || query.get(),
        move |q, _, _| state.update(|s| s.set_query(q.clone())),
        false,
    );

    let page = Memo::new(move |_| {
        state.with(|s| customers.with_value(|c| customer_page(c, s)))
    });
    let slice = Signal::derive(move || page.with(|p| p.slice));

    let rows = customers.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, customer)| {
                let id = customer.id.clone();
                view! {
                    <tr hidden=move || !page.with(|p| p.is_shown(idx))>
                        <td>{customer.name.clone()}</td>
                        <td>{customer.phone.clone().unwrap_or_default()}</td>
                        <td class="table__actions">
                            <button
                                type="button"
                                class="button button--small"
                                on:click=move |_| on_select.run(id.clone())
                            >
                                "Select for sale"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    });

    view! {
        <PageFrame
            page_id="a003_customer--list"
            category=PAGE_CAT_LIST
            title="Customers"
            hidden=Signal::derive(move || !manager.is_active(Section::Customers))
        >
            <div class="list-toolbar">
                <SearchInput value=query placeholder="Search by name or phone" id="customerSearch" />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <PaginationControls
                slice=slice
                label=Signal::derive(move || slice.get().showing_label())
                on_prev=Callback::new(move |_| state.update(|s| s.page.prev()))
                on_next=Callback::new(move |_| {
                    let total = slice.get_untracked().total;
                    state.update(|s| s.page.next(total));
                })
                hidden=customers.with_value(|c| c.is_empty())
            />
        </PageFrame>
    }
}
