use crate::layout::global_context::{use_manager, Section};
use crate::shared::components::name_form::{NameFormModal, RenameTarget};
use crate::shared::dom::{focus_input, navigate_to};
use crate::shared::icons::icon;
use crate::shared::list_utils::{search_all, EmptyState, SearchInput};
use crate::shared::modal::{use_modals, ModalId};
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

/// Keys that activate a focused brand card, like a click.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
pub fn BrandList() -> impl IntoView {
    let manager = use_manager();
    let modals = use_modals();
    let page_data = use_page_data();

    let brands = StoredValue::new(page_data.with(|p| p.brands.clone()));
    let (add_action, rename_action) =
        page_data.with(|p| (p.forms.add_brand.clone(), p.forms.rename_brand.clone()));

    let query = RwSignal::new(String::new());
    let outcome = Memo::new(move |_| {
        let q = query.get();
        brands.with_value(|b| search_all(b, &q))
    });

    let rename_target = RwSignal::new(RenameTarget::default());
    let add_ref = NodeRef::<Input>::new();
    let rename_ref = NodeRef::<Input>::new();

    let open_add = move |_: ev::MouseEvent| {
        modals.open(ModalId::AddBrand);
        focus_input(add_ref);
    };

    let cards = brands.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, brand)| {
                let detail_url = StoredValue::new(brand.detail_url.clone());
                let target = RenameTarget {
                    id: brand.id.clone(),
                    name: brand.name.clone(),
                };
                let clickable = brand.detail_url.is_some();

                let open_detail = move || {
                    if let Some(url) = detail_url.get_value() {
                        navigate_to(&url);
                    }
                };

                view! {
                    <div
                        class="entity-card"
                        class=("entity-card--link", clickable)
                        class=("hidden", move || !outcome.with(|o| o.is_visible(idx)))
                        role=clickable.then_some("link")
                        tabindex=clickable.then_some("0")
                        on:click=move |_| open_detail()
                        on:keydown=move |e: ev::KeyboardEvent| {
                            if is_activation_key(&e.key()) {
                                e.prevent_default();
                                open_detail();
                            }
                        }
                    >
                        <div class="entity-card__body">
                            <strong class="entity-card__title">{brand.name.clone()}</strong>
                            <span class="entity-card__meta">
                                {format!("{} product(s)", brand.product_count)}
                            </span>
                        </div>
                        <button
                            type="button"
                            class="button button--icon"
                            title="Rename"
                            on:click=move |e: ev::MouseEvent| {
                                // the card itself navigates on click
                                e.stop_propagation();
                                rename_target.set(target.clone());
                                modals.open(ModalId::RenameBrand);
                                focus_input(rename_ref);
                            }
                            on:keydown=move |e: ev::KeyboardEvent| e.stop_propagation()
                        >
                            {icon("edit")}
                        </button>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <PageFrame
            page_id="a002_brand--list"
            category=PAGE_CAT_LIST
            title="Brands"
            hidden=Signal::derive(move || !manager.is_active(Section::Brands))
        >
            <div class="list-toolbar">
                <SearchInput value=query placeholder="Search brands" id="brandSearch" />
                <Button appearance=ButtonAppearance::Primary on_click=open_add>
                    {icon("plus")}
                    " Add brand"
                </Button>
            </div>
            <div class="card-grid">{cards}</div>
            <EmptyState
                show=Signal::derive(move || outcome.with(|o| o.show_empty))
                message="No brands match this search."
            />

            <NameFormModal
                modal=ModalId::AddBrand
                title="Add brand"
                action=add_action
                name_field="brand_name"
                input_ref=add_ref
            />
            <NameFormModal
                modal=ModalId::RenameBrand
                title="Rename brand"
                action=rename_action
                name_field="brand_new_name"
                id_field="brand_id"
                target=rename_target
                input_ref=rename_ref
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
