pub mod draft;
pub mod state;

use self::draft::{restore_draft, save_draft, take_draft, RestoreOutcome};
use self::state::{create_state, ExpenseError, SaleEntryRow, SaleFlow};
use super::recent::RecentSales;
use crate::domain::a003_customer::ui::create::{open_customer_create, CustomerCreateModal};
use crate::domain::a003_customer::ui::picker::state::CustomerSelection;
use crate::domain::a003_customer::ui::picker::{open_customer_picker, CustomerPickerModal};
use crate::layout::global_context::{use_manager, ManagerContext, Section};
use crate::shared::dom::{alert, scroll_to_id};
use crate::shared::icons::icon;
use crate::shared::modal::{use_modals, ModalId, ModalRegistry};
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::picker::{
    open_picker, prepare_and_reveal, reset_and_reopen, PickerModal, PickerStage,
};
use crate::shared::storage::SessionStore;
use contracts::domain::a004_product::ProductCard;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

pub const SALE_PANEL_ID: &str = "multiSaleCard";

/// Sale being entered. Provided at the root so the customers list can attach a customer.
#[derive(Clone, Copy)]
pub struct SaleEntryContext {
    pub flow: RwSignal<SaleFlow>,
    pub customer: RwSignal<CustomerSelection>,
}

impl SaleEntryContext {
    pub fn new(selected_customer_id: Option<String>) -> Self {
        Self {
            flow: create_state(),
            customer: RwSignal::new(CustomerSelection::new(selected_customer_id)),
        }
    }
}

pub fn use_sale_entry() -> SaleEntryContext {
    use_context::<SaleEntryContext>().expect("SaleEntryContext not found")
}

/// Attaches a customer to the sale and brings the sale entry into view.
pub fn select_customer_for_sale(
    sale: SaleEntryContext,
    modals: ModalRegistry,
    manager: ManagerContext,
    customer_id: &str,
) {
    sale.customer.update(|c| c.select(customer_id));
    modals.close(ModalId::CustomerPicker);
    manager.activate(Section::Sales);
    scroll_to_id(SALE_PANEL_ID);
}

fn describe_product(product: &ProductCard) -> String {
    format!("In stock {} · {}", product.quantity, product.sale_price_text())
}

fn sale_row(
    flow: RwSignal<SaleFlow>,
    product_id: String,
    product_name: String,
    expense_percent: f64,
    currency: String,
) -> impl IntoView {
    let id = StoredValue::new(product_id.clone());

    let read = move |get: fn(&SaleEntryRow) -> String| {
        move || {
            let pid = id.get_value();
            flow.with(|f| f.rows().iter().find(|r| r.product_id == pid).map(get))
                .unwrap_or_default()
        }
    };
    let locked = move || {
        let pid = id.get_value();
        flow.with(|f| f.rows().iter().any(|r| r.product_id == pid && r.price_locked()))
    };
    let write = move |apply: fn(&mut SaleEntryRow, String)| {
        move |ev: leptos::ev::Event| {
            let v = event_target_value(&ev);
            let pid = id.get_value();
            flow.update(|f| {
                if let Some(row) = f.row_mut(&pid) {
                    apply(row, v);
                }
            });
        }
    };
    let toggle_expense = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        let pid = id.get_value();
        let result = flow.try_update(|f| {
            f.row_mut(&pid)
                .map(|row| row.set_expense(enabled, expense_percent))
        });
        if let Some(Some(Err(e @ ExpenseError::MissingPurchaseRate))) = result {
            alert(&e.to_string());
        }
    };

    view! {
        <div class="batch-entry">
            <div class="batch-entry-head">
                <strong>{product_name}</strong>
                <input type="hidden" name="sale_product_id[]" value=product_id />
            </div>
            <div class="batch-entry-grid">
                <label>
                    <span>"Quantity"</span>
                    <input
                        type="number"
                        name="sale_quantity[]"
                        min="1"
                        required
                        placeholder="0"
                        prop:value=read(|r| r.quantity.clone())
                        on:input=write(|r, v| r.quantity = v)
                    />
                </label>
                <label>
                    <span>{format!("Sale price ({currency})")}</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        name="sale_price[]"
                        required
                        placeholder="0.00"
                        class=("is-locked", locked)
                        prop:readOnly=locked
                        prop:value=read(|r| r.price.clone())
                        on:input=write(|r, v| r.price = v)
                    />
                </label>
            </div>
            <div class="batch-entry-foot">
                <input
                    type="hidden"
                    name="sale_expense[]"
                    prop:value=read(|r| r.expense_flag().to_string())
                />
                <label class="expense-toggle">
                    <input type="checkbox" prop:checked=locked on:change=toggle_expense />
                    <span>"Sell with expense (no profit)"</span>
                </label>
            </div>
        </div>
    }
}

/// Sale entry: product picker, customer picker, one row per product.
#[component]
pub fn SaleEntryView() -> impl IntoView {
    let manager = use_manager();
    let modals = use_modals();
    let page_data = use_page_data();
    let sale = use_sale_entry();
    let flow = sale.flow;
    let customer = sale.customer;

    let products = StoredValue::new(page_data.with(|p| p.products.clone()));
    let customers = StoredValue::new(page_data.with(|p| p.customers.clone()));
    let action = page_data.with(|p| p.forms.record_sale.clone());
    let expense_percent = page_data.with(|p| p.settings.effective_expense_percent());
    let currency = StoredValue::new(page_data.with(|p| p.settings.currency.clone()));

    let product_search_ref = NodeRef::<Input>::new();
    let customer_query = RwSignal::new(String::new());
    let customer_search_ref = NodeRef::<Input>::new();
    let new_customer_name = RwSignal::new(String::new());
    let new_customer_phone = RwSignal::new(String::new());
    let new_customer_ref = NodeRef::<Input>::new();

    if let Some(draft) = take_draft(&SessionStore) {
        let outcome = products.with_value(|items| {
            flow.try_update(|f| restore_draft(f, items, &draft, expense_percent))
        });
        log::debug!("sale draft restored: {outcome:?}");
        if let Some(RestoreOutcome::Prepared { expense_rejected, .. }) = outcome {
            if expense_rejected > 0 {
                alert(&ExpenseError::MissingPurchaseRate.to_string());
            }
            scroll_to_id(SALE_PANEL_ID);
        }
    }

    let on_prepare = Callback::new(move |_| {
        prepare_and_reveal(flow, products, modals, ModalId::SalePicker, SALE_PANEL_ID)
    });
    let on_select_customer = Callback::new(move |id: String| {
        select_customer_for_sale(sale, modals, manager, &id)
    });
    let on_create_customer = Callback::new(move |_| {
        open_customer_create(modals, new_customer_name, new_customer_phone, new_customer_ref)
    });
    let on_customer_submit = Callback::new(move |_| {
        products.with_value(|items| flow.with_untracked(|f| save_draft(&SessionStore, f, items)))
    });

    let customer_label = move || customer.with(|c| customers.with_value(|list| c.label(list)));
    let hide_clear = move || !customer.with(|c| customers.with_value(|list| c.show_clear(list)));

    view! {
        <PageFrame
            page_id="a006_sale--usecase"
            category=PAGE_CAT_USECASE
            title="Sales"
            hidden=Signal::derive(move || !manager.is_active(Section::Sales))
        >
            <div class="usecase-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_picker(flow, modals, ModalId::SalePicker, product_search_ref)
                >
                    {icon("sales")}
                    " Pick products"
                </Button>
                <div class="customer-field">
                    <span class="customer-field__label" id="saleCustomerLabel">{customer_label}</span>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| open_customer_picker(modals, customer_query, customer_search_ref)
                    >
                        {icon("customers")}
                        " Choose customer"
                    </button>
                    <button
                        type="button"
                        class="button button--icon"
                        title="Clear customer"
                        hidden=hide_clear
                        on:click=move |_| customer.update(CustomerSelection::clear)
                    >
                        {icon("x")}
                    </button>
                </div>
            </div>

            <div
                id=SALE_PANEL_ID
                class="card batch-card"
                hidden=move || flow.with(|f| f.stage() != PickerStage::Prepared)
            >
                <form method="post" action=action class="batch-form">
                    <input type="hidden" name="sale_type" value="sale" />
                    <input
                        type="hidden"
                        name="sale_customer_id"
                        id="saleCustomerId"
                        prop:value=move || customer.with(|c| c.form_value())
                    />
                    <div class="batch-entry-list">
                        <For
                            each=move || {
                                flow.with(|f| {
                                    f.rows()
                                        .iter()
                                        .map(|r| (r.product_id.clone(), r.product_name.clone()))
                                        .collect::<Vec<_>>()
                                })
                            }
                            key=|(id, _)| id.clone()
                            children=move |(id, name)| {
                                sale_row(flow, id, name, expense_percent, currency.get_value())
                            }
                        />
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| reset_and_reopen(flow, modals, ModalId::SalePicker, product_search_ref)
                        >
                            {icon("undo")}
                            " Change selection"
                        </button>
                        <button type="submit" class="button button--primary">"Record sale"</button>
                    </div>
                </form>
            </div>

            <RecentSales />

            <PickerModal
                modal=ModalId::SalePicker
                title="Pick products to sell"
                flow=flow
                items=products
                search_ref=product_search_ref
                describe=describe_product
                on_prepare=on_prepare
            />
            <CustomerPickerModal
                query=customer_query
                search_ref=customer_search_ref
                on_select=on_select_customer
                on_create=on_create_customer
            />
            <CustomerCreateModal
                name=new_customer_name
                phone=new_customer_phone
                name_ref=new_customer_ref
                on_submit=on_customer_submit
            />
        </PageFrame>
    }
}
