use crate::shared::config::DEFAULT_REORDER_LEVEL;
use crate::shared::modal::{use_modals, ModalFrame, ModalId};
use crate::shared::page_data::use_page_data;
use contracts::domain::a004_product::ProductCard;
use leptos::prelude::*;

/// Values the edit dialog is pre-filled with
#[derive(Clone, Debug, PartialEq)]
pub struct EditProductForm {
    pub product_id: String,
    pub name: String,
    pub brand_id: String,
    pub category_id: String,
    pub reorder_level: String,
}

impl Default for EditProductForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            name: String::new(),
            brand_id: String::new(),
            category_id: String::new(),
            reorder_level: DEFAULT_REORDER_LEVEL.to_string(),
        }
    }
}

impl From<&ProductCard> for EditProductForm {
    fn from(product: &ProductCard) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand_id: product.brand_id.clone().unwrap_or_default(),
            category_id: product.category_id.clone().unwrap_or_default(),
            reorder_level: product.reorder_level.to_string(),
        }
    }
}

#[component]
pub fn EditProductModal(form: RwSignal<EditProductForm>) -> impl IntoView {
    let modals = use_modals();
    let page_data = use_page_data();
    let action = page_data.with(|p| p.forms.edit_product.clone());
    let brands = page_data.with(|p| p.brands.clone());
    let categories = page_data.with(|p| p.categories.clone());

    view! {
        <ModalFrame id=ModalId::EditProduct title="Edit product".to_string()>
            <form method="post" action=action class="modal-form">
                <input
                    type="hidden"
                    name="edit_product_id"
                    prop:value=move || form.with(|f| f.product_id.clone())
                />
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name="edit_product_name"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                    />
                </label>
                <label class="form-field">
                    <span>"Brand"</span>
                    <select
                        name="edit_product_brand_id"
                        prop:value=move || form.with(|f| f.brand_id.clone())
                    >
                        <option value="">"No brand"</option>
                        {brands
                            .into_iter()
                            .map(|b| view! { <option value=b.id>{b.name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Category"</span>
                    <select
                        name="edit_product_category_id"
                        prop:value=move || form.with(|f| f.category_id.clone())
                    >
                        <option value="">"No category"</option>
                        {categories
                            .into_iter()
                            .map(|c| view! { <option value=c.id>{c.name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Reorder level"</span>
                    <input
                        type="number"
                        min="0"
                        name="edit_product_reorder_level"
                        prop:value=move || form.with(|f| f.reorder_level.clone())
                    />
                </label>
                <div class="modal-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| modals.close(ModalId::EditProduct)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
