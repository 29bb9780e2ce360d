//! Section navigation

use crate::layout::global_context::{use_manager, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let manager = use_manager();

    view! {
        <nav class="app-sidebar__content">
            {Section::all()
                .into_iter()
                .map(|section| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || manager.is_active(section)
                            role="button"
                            tabindex="0"
                            on:click=move |_| manager.activate(section)
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    manager.activate(section);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(section.icon())}
                                <span>{section.label()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
