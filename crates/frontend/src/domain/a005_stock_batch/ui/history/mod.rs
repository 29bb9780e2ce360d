use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use crate::shared::page_data::use_page_data;
use leptos::prelude::*;

/// Cards of past restock batches, newest first as delivered.
#[component]
pub fn RestockHistory() -> impl IntoView {
    let page_data = use_page_data();
    let (batches, currency) =
        page_data.with(|p| (p.stock_batches.clone(), p.settings.currency.clone()));

    if batches.is_empty() {
        return view! { <p class="muted">"No restock batches yet."</p> }.into_any();
    }

    view! {
        <div class="history">
            <h2 class="section-title">"Restock history"</h2>
            <div class="card-grid">
                {batches
                    .into_iter()
                    .map(|batch| {
                        view! {
                            <div class="entity-card" data-batch-date=batch.batch_date.clone()>
                                <strong class="entity-card__title">{format_date(&batch.batch_date)}</strong>
                                <span class="entity-card__meta">
                                    {format!("{} product(s)", batch.product_count)}
                                </span>
                                <span>{format_money(batch.total_purchase, &currency)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
