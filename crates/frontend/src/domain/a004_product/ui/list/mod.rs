pub mod state;

use self::state::{create_state, product_page};
use super::edit::{EditProductForm, EditProductModal};
use crate::layout::global_context::{use_manager, Section};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{EmptyState, SearchInput};
use crate::shared::modal::{use_modals, ModalId};
use crate::shared::number_format::format_money;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_product::StockStatus;
use leptos::prelude::*;
use thaw::*;

fn stock_badge_color(status: StockStatus) -> BadgeColor {
    match status {
        StockStatus::InStock => BadgeColor::Success,
        StockStatus::LowStock => BadgeColor::Warning,
        StockStatus::OutOfStock => BadgeColor::Danger,
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let manager = use_manager();
    let modals = use_modals();
    let page_data = use_page_data();

    let products = StoredValue::new(page_data.with(|p| p.products.clone()));
    let categories = page_data.with(|p| p.categories.clone());
    let brands = page_data.with(|p| p.brands.clone());
    let currency = page_data.with(|p| p.settings.currency.clone());

    let state = create_state();
    let query = RwSignal::new(String::new());
    let edit_form = RwSignal::new(EditProductForm::default());

    Effect::watch(
        move || query.get(),
        move |q, _, _| state.update(|s| s.set_query(q.clone())),
        false,
    );

    let page = Memo::new(move |_| state.with(|s| products.with_value(|p| product_page(p, s))));
    let slice = Signal::derive(move || page.with(|p| p.slice));

    let stock_chip = move |status: Option<StockStatus>, label: &'static str| {
        view! {
            <button
                type="button"
                class="chip"
                class=("active", move || state.with(|s| s.filters.stock == status))
                on:click=move |_| state.update(|s| s.set_stock(status))
            >
                {label}
            </button>
        }
    };

    let cards = products.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, product)| {
                let status = product.stock_status();
                let for_edit = EditProductForm::from(product);
                let meta = [product.category_name.clone(), product.brand_name.clone()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" · ");
                view! {
                    <div
                        class="product-card"
                        class=("hidden", move || !page.with(|p| p.is_shown(idx)))
                    >
                        <div class="product-card__head">
                            <strong>{product.name.clone()}</strong>
                            <Badge appearance=BadgeAppearance::Tint color=stock_badge_color(status)>
                                {status.label()}
                            </Badge>
                        </div>
                        <span class="product-card__meta">{meta}</span>
                        <div class="product-card__numbers">
                            <span>{format!("Qty: {}", product.quantity)}</span>
                            <span>{format_money(product.price, &currency)}</span>
                        </div>
                        <button
                            type="button"
                            class="button button--small"
                            on:click=move |_| {
                                edit_form.set(for_edit.clone());
                                modals.open(ModalId::EditProduct);
                            }
                        >
                            {icon("edit")}
                            " Edit"
                        </button>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <PageFrame
            page_id="a004_product--list"
            category=PAGE_CAT_LIST
            title="Products"
            hidden=Signal::derive(move || !manager.is_active(Section::Products))
        >
            <div class="filter-panel">
                <SearchInput value=query placeholder="Search products" id="productSearch" />
                <select
                    id="productCategoryFilter"
                    on:change=move |ev| state.update(|s| s.set_category(event_target_value(&ev)))
                >
                    <option value="">"All categories"</option>
                    {categories
                        .into_iter()
                        .map(|c| view! { <option value=c.id>{c.name}</option> })
                        .collect_view()}
                </select>
                <select
                    id="productBrandFilter"
                    on:change=move |ev| state.update(|s| s.set_brand(event_target_value(&ev)))
                >
                    <option value="">"All brands"</option>
                    {brands
                        .into_iter()
                        .map(|b| view! { <option value=b.id>{b.name}</option> })
                        .collect_view()}
                </select>
                <div class="chip-group">
                    {stock_chip(None, "All")}
                    {StockStatus::all()
                        .into_iter()
                        .map(|status| stock_chip(Some(status), status.label()))
                        .collect_view()}
                </div>
            </div>

            <p class="list-count">{move || page.with(|p| p.count_label.clone())}</p>
            <div class="product-grid">{cards}</div>
            <EmptyState
                show=Signal::derive(move || page.with(|p| p.show_empty))
                message="No products match these filters."
            />
            <PaginationControls
                slice=slice
                label=Signal::derive(move || slice.get().page_label())
                on_prev=Callback::new(move |_| state.update(|s| s.page.prev()))
                on_next=Callback::new(move |_| {
                    let total = slice.get_untracked().total;
                    state.update(|s| s.page.next(total));
                })
                hidden=Signal::derive(move || page.with(|p| p.hide_pagination))
            />

            <EditProductModal form=edit_form />
        </PageFrame>
    }
}
