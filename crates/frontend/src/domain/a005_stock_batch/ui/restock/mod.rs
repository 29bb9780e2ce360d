pub mod state;

use self::state::{create_state, BatchEntryRow, RestockFlow};
use crate::layout::global_context::{use_manager, Section};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::modal::{use_modals, ModalId};
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::picker::{
    open_picker, prepare_and_reveal, reset_and_reopen, PickerModal, PickerStage,
};
use super::history::RestockHistory;
use contracts::domain::a004_product::ProductCard;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

pub const RESTOCK_PANEL_ID: &str = "multiBatchCard";

fn describe_product(product: &ProductCard) -> String {
    let category = product.category_name.as_deref().unwrap_or("Uncategorized");
    format!("{category} · in stock {}", product.quantity)
}

fn batch_row(
    flow: RwSignal<RestockFlow>,
    product_id: String,
    product_name: String,
    currency: String,
) -> impl IntoView {
    let id = StoredValue::new(product_id.clone());

    let value = move |get: fn(&BatchEntryRow) -> String| {
        move || {
            let pid = id.get_value();
            flow.with(|f| f.rows().iter().find(|r| r.product_id == pid).map(get))
                .unwrap_or_default()
        }
    };
    let update = move |apply: fn(&mut BatchEntryRow, String)| {
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

    view! {
        <div class="batch-entry">
            <div class="batch-entry-head">
                <strong>{product_name}</strong>
                <input type="hidden" name="batch_product_id[]" value=product_id />
            </div>
            <div class="batch-entry-grid">
                <label>
                    <span>"Quantity"</span>
                    <input
                        type="number"
                        name="batch_quantity[]"
                        min="1"
                        required
                        placeholder="0"
                        prop:value=value(|r| r.quantity.clone())
                        on:input=update(|r, v| r.quantity = v)
                    />
                </label>
                <label>
                    <span>{format!("Purchase rate ({currency})")}</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        name="batch_purchase_rate[]"
                        required
                        placeholder="0.00"
                        prop:value=value(|r| r.purchase_rate.clone())
                        on:input=update(|r, v| r.purchase_rate = v)
                    />
                </label>
                <label>
                    <span>{format!("Sale price ({currency})")}</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        name="batch_sale_price[]"
                        required
                        placeholder="0.00"
                        prop:value=value(|r| r.sale_price.clone())
                        on:input=update(|r, v| r.sale_price = v)
                    />
                </label>
            </div>
        </div>
    }
}

/// Restock: pick products, fill one batch row per product, post the batch.
#[component]
pub fn RestockView() -> impl IntoView {
    let manager = use_manager();
    let modals = use_modals();
    let page_data = use_page_data();

    let products = StoredValue::new(page_data.with(|p| p.products.clone()));
    let action = page_data.with(|p| p.forms.restock_batch.clone());
    let currency = StoredValue::new(page_data.with(|p| p.settings.currency.clone()));
    let batch_date = page_data.with(|p| p.today.clone()).unwrap_or_else(today_iso);

    let flow = create_state();
    let search_ref = NodeRef::<Input>::new();

    let on_prepare = Callback::new(move |_| {
        prepare_and_reveal(flow, products, modals, ModalId::StockPicker, RESTOCK_PANEL_ID)
    });

    view! {
        <PageFrame
            page_id="a005_stock_batch--usecase"
            category=PAGE_CAT_USECASE
            title="Restock"
            hidden=Signal::derive(move || !manager.is_active(Section::Restock))
        >
            <div class="usecase-toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_picker(flow, modals, ModalId::StockPicker, search_ref)
                >
                    {icon("restock")}
                    " Pick products"
                </Button>
            </div>

            <div
                id=RESTOCK_PANEL_ID
                class="card batch-card"
                hidden=move || flow.with(|f| f.stage() != PickerStage::Prepared)
            >
                <form method="post" action=action class="batch-form">
                    <label class="form-field">
                        <span>"Batch date"</span>
                        <input type="date" name="batch_date_group" value=batch_date />
                    </label>
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
                            children=move |(id, name)| batch_row(flow, id, name, currency.get_value())
                        />
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| reset_and_reopen(flow, modals, ModalId::StockPicker, search_ref)
                        >
                            {icon("undo")}
                            " Change selection"
                        </button>
                        <button type="submit" class="button button--primary">"Save batch"</button>
                    </div>
                </form>
            </div>

            <RestockHistory />

            <PickerModal
                modal=ModalId::StockPicker
                title="Pick products to restock"
                flow=flow
                items=products
                search_ref=search_ref
                describe=describe_product
                on_prepare=on_prepare
            />
        </PageFrame>
    }
}
