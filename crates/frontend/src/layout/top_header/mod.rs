//! Top bar: sidebar toggle and the shop name.

use crate::layout::global_context::use_manager;
use crate::shared::icons::icon;
use crate::shared::page_data::use_page_data;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let manager = use_manager();
    let shop_name = use_page_data().with(|p| p.shop.name.clone());
    let title = if shop_name.trim().is_empty() {
        "Store manager".to_string()
    } else {
        shop_name
    };

    let is_sidebar_visible = move || manager.sidebar_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| manager.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>
        </div>
    }
}
