use super::returns::state::create_state;
use super::returns::{open_return, ReturnSaleModal, ReturnScope};
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::format_money;
use crate::shared::modal::use_modals;
use crate::shared::page_data::use_page_data;
use contracts::domain::a006_sale::{SaleSummary, SaleType};
use leptos::prelude::*;
use thaw::*;

fn sale_type_badge(sale_type: SaleType) -> impl IntoView {
    let (color, label) = match sale_type {
        SaleType::Sale => (BadgeColor::Success, "Sale"),
        SaleType::Return => (BadgeColor::Warning, "Return"),
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }
}

/// Recent sales with whole-sale and per-line return buttons.
#[component]
pub fn RecentSales() -> impl IntoView {
    let modals = use_modals();
    let page_data = use_page_data();
    let (sales, currency) =
        page_data.with(|p| (p.recent_sales.clone(), p.settings.currency.clone()));
    let session = create_state();

    if sales.is_empty() {
        return view! { <p class="muted">"No sales recorded yet."</p> }.into_any();
    }

    let sales = StoredValue::new(sales);
    let find = move |sale_id: &str| -> Option<SaleSummary> {
        sales.with_value(|list| list.iter().find(|s| s.id == sale_id).cloned())
    };

    let rows = sales.with_value(|list| {
        list.iter()
            .map(|sale| {
                let sale_id = sale.id.clone();
                let returnable = sale.sale_type == SaleType::Sale;
                let whole_id = sale_id.clone();
                let items = sale
                    .items
                    .iter()
                    .map(|line| {
                        let sale_id = sale_id.clone();
                        let line_id = line.id.clone();
                        let can_return = sale.sale_type == SaleType::Sale
                            && line.remaining_quantity() > 0;
                        view! {
                            <li class="sale-line">
                                <span>{format!("{} × {}", line.product_name, line.quantity)}</span>
                                <span class="muted">{format_money(line.unit_price, &currency)}</span>
                                <button
                                    type="button"
                                    class="button button--link"
                                    hidden=!can_return
                                    on:click=move |_| {
                                        let Some(sale) = find(&sale_id) else { return };
                                        let lines: Vec<_> = sale
                                            .items
                                            .into_iter()
                                            .filter(|l| l.id == line_id)
                                            .collect();
                                        open_return(session, modals, &sale_id, &lines, ReturnScope::SingleItem);
                                    }
                                >
                                    "Return"
                                </button>
                            </li>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="entity-card sale-card" data-sale-id=sale.id.clone()>
                        <div class="sale-card__head">
                            <strong>{format!("#{}", sale.id)}</strong>
                            {sale_type_badge(sale.sale_type)}
                            <span class="muted">{format_datetime(&sale.created_at)}</span>
                        </div>
                        <span class="entity-card__meta">
                            {sale.customer_name.clone().unwrap_or_else(|| "Walk-in customer".to_string())}
                        </span>
                        <ul class="sale-lines">{items}</ul>
                        <div class="sale-card__foot">
                            <strong>{format_money(sale.total_amount, &currency)}</strong>
                            <button
                                type="button"
                                class="button button--secondary"
                                hidden=!returnable
                                on:click=move |_| {
                                    let Some(sale) = find(&whole_id) else { return };
                                    open_return(
                                        session,
                                        modals,
                                        &whole_id,
                                        &sale.items,
                                        ReturnScope::WholeSale,
                                    );
                                }
                            >
                                "Return sale"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <div class="history">
            <h2 class="section-title">"Recent sales"</h2>
            <div class="card-grid">{rows}</div>
            <ReturnSaleModal session=session />
        </div>
    }
    .into_any()
}
