use crate::shared::dom::focus_input;
use crate::shared::modal::{use_modals, ModalFrame, ModalId, ModalRegistry};
use crate::shared::page_data::use_page_data;
use leptos::html::Input;
use leptos::prelude::*;

/// Clears the form and shows the create-customer dialog.
pub fn open_customer_create(
    modals: ModalRegistry,
    name: RwSignal<String>,
    phone: RwSignal<String>,
    name_ref: NodeRef<Input>,
) {
    name.set(String::new());
    phone.set(String::new());
    modals.open(ModalId::CustomerCreate);
    focus_input(name_ref);
}

/// New customer form, posted natively. `on_submit` runs before the browser
/// leaves the page.
#[component]
pub fn CustomerCreateModal(
    name: RwSignal<String>,
    phone: RwSignal<String>,
    name_ref: NodeRef<Input>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let modals = use_modals();
    let action = use_page_data().with(|p| p.forms.create_customer.clone());

    view! {
        <ModalFrame id=ModalId::CustomerCreate title="New customer".to_string()>
            <form
                method="post"
                action=action
                id="customerCreateForm"
                class="modal-form"
                on:submit=move |_| on_submit.run(())
            >
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name="customer_name"
                        required
                        autocomplete="off"
                        node_ref=name_ref
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Phone"</span>
                    <input
                        type="tel"
                        name="customer_phone"
                        autocomplete="off"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| modals.close(ModalId::CustomerCreate)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">"Create"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
