use crate::layout::global_context::{use_manager, Section};
use crate::shared::components::name_form::{NameFormModal, RenameTarget};
use crate::shared::dom::focus_input;
use crate::shared::icons::icon;
use crate::shared::list_utils::{search_all, EmptyState, SearchInput};
use crate::shared::modal::{use_modals, ModalId};
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_category::CategoryCard;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let manager = use_manager();
    let modals = use_modals();
    let page_data = use_page_data();

    let categories = StoredValue::new(page_data.with(|p| p.categories.clone()));
    let (add_action, rename_action) =
        page_data.with(|p| (p.forms.add_category.clone(), p.forms.rename_category.clone()));

    let query = RwSignal::new(String::new());
    let outcome = Memo::new(move |_| {
        let q = query.get();
        categories.with_value(|c| search_all(c, &q))
    });

    let rename_target = RwSignal::new(RenameTarget::default());
    let add_ref = NodeRef::<Input>::new();
    let rename_ref = NodeRef::<Input>::new();

    let open_add = move |_: leptos::ev::MouseEvent| {
        modals.open(ModalId::AddCategory);
        focus_input(add_ref);
    };

    let open_rename = move |category: &CategoryCard| {
        rename_target.set(RenameTarget {
            id: category.id.clone(),
            name: category.name.clone(),
        });
        modals.open(ModalId::RenameCategory);
        focus_input(rename_ref);
    };

    let cards = categories.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, category)| {
                let for_rename = category.clone();
                view! {
                    <div
                        class="entity-card"
                        class=("hidden", move || !outcome.with(|o| o.is_visible(idx)))
                    >
                        <div class="entity-card__body">
                            <strong class="entity-card__title">{category.name.clone()}</strong>
                            <span class="entity-card__meta">
                                {format!("{} product(s)", category.product_count)}
                            </span>
                        </div>
                        <button
                            type="button"
                            class="button button--icon"
                            title="Rename"
                            on:click=move |_| open_rename(&for_rename)
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
            page_id="a001_category--list"
            category=PAGE_CAT_LIST
            title="Categories"
            hidden=Signal::derive(move || !manager.is_active(Section::Categories))
        >
            <div class="list-toolbar">
                <SearchInput value=query placeholder="Search categories" id="categorySearch" />
                <Button appearance=ButtonAppearance::Primary on_click=open_add>
                    {icon("plus")}
                    " Add category"
                </Button>
            </div>
            <div class="card-grid">{cards}</div>
            <EmptyState
                show=Signal::derive(move || outcome.with(|o| o.show_empty))
                message="No categories match this search."
            />

            <NameFormModal
                modal=ModalId::AddCategory
                title="Add category"
                action=add_action
                name_field="category_name"
                input_ref=add_ref
            />
            <NameFormModal
                modal=ModalId::RenameCategory
                title="Rename category"
                action=rename_action
                name_field="category_new_name"
                id_field="category_id"
                target=rename_target
                input_ref=rename_ref
            />
        </PageFrame>
    }
}
