pub mod state;

pub use state::{eligible_items, ReturnError, ReturnItem, ReturnScope, ReturnSession};

use crate::shared::dom::alert;
use crate::shared::modal::{use_modals, ModalFrame, ModalId, ModalRegistry};
use crate::shared::page_data::use_page_data;
use contracts::domain::a006_sale::SaleLineItem;
use leptos::prelude::*;

/// Opens the return dialog for `lines` of a sale. A fully returned sale only
/// raises an alert.
pub fn open_return(
    session: RwSignal<Option<ReturnSession>>,
    modals: ModalRegistry,
    sale_id: &str,
    lines: &[SaleLineItem],
    scope: ReturnScope,
) {
    match ReturnSession::open(sale_id, lines, scope) {
        Ok(opened) => {
            log::debug!("return opened for sale {} ({} items)", sale_id, opened.items.len());
            session.set(Some(opened));
            modals.open(ModalId::ReturnSale);
        }
        Err(ReturnError::NothingToReturn) => {}
        Err(e @ ReturnError::FullyReturned) => alert(&e.to_string()),
    }
}

fn return_row(
    session: RwSignal<Option<ReturnSession>>,
    item: ReturnItem,
    currency: String,
) -> impl IntoView {
    let id = StoredValue::new(item.sale_item_id.clone());
    let selected = move || {
        let sid = id.get_value();
        session.with(|s| {
            s.as_ref()
                .and_then(|s| s.items.iter().find(|i| i.sale_item_id == sid))
                .is_some_and(|i| i.selected)
        })
    };
    let disabled = move || !selected();
    let quantity = move || {
        let sid = id.get_value();
        session.with(|s| {
            s.as_ref()
                .and_then(|s| s.items.iter().find(|i| i.sale_item_id == sid))
                .map(|i| i.quantity.clone())
                .unwrap_or_default()
        })
    };
    let price = item.unit_price.to_string();

    view! {
        <div class="batch-entry">
            <div class="batch-entry-head">
                <label class="return-select">
                    <input
                        type="checkbox"
                        class="return-item-toggle"
                        prop:checked=selected
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            session.update(|s| {
                                if let Some(s) = s {
                                    s.set_selected(&id.get_value(), checked);
                                }
                            });
                        }
                    />
                    <span>{item.product_name.clone()}</span>
                </label>
                <input
                    type="hidden"
                    name="return_sale_item_id[]"
                    value=item.sale_item_id.clone()
                    prop:disabled=disabled
                />
                <input type="hidden" name="return_price[]" value=price.clone() prop:disabled=disabled />
            </div>
            <div class="batch-entry-grid">
                <label>
                    <span>{item.quantity_label()}</span>
                    <input
                        type="number"
                        name="return_quantity[]"
                        min="1"
                        max=item.remaining_quantity.to_string()
                        required
                        prop:disabled=disabled
                        prop:value=quantity
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            session.update(|s| {
                                if let Some(s) = s {
                                    s.set_quantity(&id.get_value(), v);
                                }
                            });
                        }
                    />
                </label>
                <label>
                    <span>{format!("Unit price ({currency})")}</span>
                    <input type="number" value=price readonly />
                </label>
            </div>
        </div>
    }
}

/// Return dialog. Confirm is enabled only with the checkbox ticked and at
/// least one line checked.
#[component]
pub fn ReturnSaleModal(session: RwSignal<Option<ReturnSession>>) -> impl IntoView {
    let modals = use_modals();
    let page_data = use_page_data();
    let forms = StoredValue::new(page_data.with(|p| p.forms.clone()));
    let currency = StoredValue::new(page_data.with(|p| p.settings.currency.clone()));

    let sale_id = move || session.with(|s| s.as_ref().map(|s| s.sale_id.clone()).unwrap_or_default());
    let action = move || forms.with_value(|f| f.return_url(&sale_id()));
    let title = Signal::derive(move || format!("Return sale #{}", sale_id()));
    let can_submit = move || session.with(|s| s.as_ref().is_some_and(ReturnSession::can_submit));

    view! {
        <ModalFrame id=ModalId::ReturnSale title=title>
            <form method="post" action=action id="returnSaleForm" class="modal-form">
                <div class="batch-entry-list" id="returnSaleItems">
                    <For
                        each=move || {
                            session.with(|s| {
                                s.as_ref()
                                    .map(|s| {
                                        s.items
                                            .iter()
                                            .map(|i| (s.sale_id.clone(), i.clone()))
                                            .collect::<Vec<_>>()
                                    })
                                    .unwrap_or_default()
                            })
                        }
                        key=|(sale, item)| (sale.clone(), item.sale_item_id.clone(), item.remaining_quantity)
                        children=move |(_, item)| return_row(session, item, currency.get_value())
                    />
                </div>
                <label class="confirm-check">
                    <input
                        type="checkbox"
                        id="returnSaleConfirm"
                        prop:checked=move || session.with(|s| s.as_ref().is_some_and(|s| s.confirmed))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            session.update(|s| {
                                if let Some(s) = s {
                                    s.confirmed = checked;
                                }
                            });
                        }
                    />
                    <span>"I confirm the returned goods are back in stock."</span>
                </label>
                <div class="form-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| modals.close(ModalId::ReturnSale)
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        id="confirmReturnBtn"
                        class="button button--primary"
                        prop:disabled=move || !can_submit()
                    >
                        "Confirm return"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
