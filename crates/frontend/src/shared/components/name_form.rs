use crate::shared::modal::{use_modals, ModalFrame, ModalId};
use leptos::html::Input;
use leptos::prelude::*;

/// Record targeted by a rename dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameTarget {
    pub id: String,
    pub name: String,
}

/// Single-field create/rename dialog posted natively to `action`.
///
/// With `id_field` set, the dialog renames: it posts the record id in a
/// hidden input and pre-fills the name from `target`.
#[component]
pub fn NameFormModal(
    modal: ModalId,
    title: &'static str,
    #[prop(into)]
    action: String,
    /// Form field carrying the (new) name
    name_field: &'static str,
    #[prop(optional)]
    id_field: Option<&'static str>,
    /// Current rename target; ignored for create dialogs
    #[prop(optional, into)]
    target: Option<Signal<RenameTarget>>,
    #[prop(optional)]
    input_ref: Option<NodeRef<Input>>,
) -> impl IntoView {
    let modals = use_modals();
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);
    let target = target.unwrap_or_else(|| Signal::stored(RenameTarget::default()));

    view! {
        <ModalFrame id=modal title=title.to_string()>
            <form method="post" action=action class="modal-form">
                {id_field.map(|field| view! {
                    <input type="hidden" name=field prop:value=move || target.with(|t| t.id.clone()) />
                })}
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        name=name_field
                        required
                        autocomplete="off"
                        node_ref=input_ref
                        prop:value=move || target.with(|t| t.name.clone())
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| modals.close(modal)>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">"Save"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
