//! Backdrop dialogs of the manager panel.
//!
//! Every dialog is always mounted; opening one only adds the `show` marker
//! to its backdrop. There is no stack: Escape closes every open dialog.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    AddCategory,
    RenameCategory,
    AddBrand,
    RenameBrand,
    EditProduct,
    StockPicker,
    SalePicker,
    CustomerPicker,
    CustomerCreate,
    ReturnSale,
}

impl ModalId {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ModalId::AddCategory => "addCategoryModal",
            ModalId::RenameCategory => "renameCategoryModal",
            ModalId::AddBrand => "addBrandModal",
            ModalId::RenameBrand => "renameBrandModal",
            ModalId::EditProduct => "editProductModal",
            ModalId::StockPicker => "stockPickerModal",
            ModalId::SalePicker => "salePickerModal",
            ModalId::CustomerPicker => "customerPickerModal",
            ModalId::CustomerCreate => "customerCreateModal",
            ModalId::ReturnSale => "returnSaleModal",
        }
    }
}

/// Set of currently shown dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    open: HashSet<ModalId>,
}

impl ModalSet {
    pub fn open(&mut self, id: ModalId) {
        self.open.insert(id);
    }

    pub fn close(&mut self, id: ModalId) {
        self.open.remove(&id);
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Modal registry provided at the application root.
#[derive(Clone, Copy)]
pub struct ModalRegistry {
    modals: RwSignal<ModalSet>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self {
            modals: RwSignal::new(ModalSet::default()),
        }
    }

    pub fn open(&self, id: ModalId) {
        self.modals.update(|m| m.open(id));
    }

    pub fn close(&self, id: ModalId) {
        self.modals.update(|m| m.close(id));
    }

    pub fn close_all(&self) {
        if self.modals.with_untracked(|m| m.open_count() > 0) {
            self.modals.update(ModalSet::close_all);
        }
    }

    /// Tracked read, for use inside views.
    pub fn is_open(&self, id: ModalId) -> bool {
        self.modals.with(|m| m.is_open(id))
    }
}

impl Default for ModalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modals() -> ModalRegistry {
    use_context::<ModalRegistry>()
        .expect("ModalRegistry not provided in context (provide it in app root)")
}

/// Installs the global Escape handler. Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = use_modals();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    modals.close_all();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives as long as the app; keep the closure alive.
            closure.forget();
        }
    });
}

/// Backdrop + dialog surface with a title bar and a close button.
///
/// A click closes the dialog only when it lands on the backdrop itself,
/// never when it bubbles up from the dialog content.
#[component]
pub fn ModalFrame(
    id: ModalId,
    #[prop(into)]
    title: Signal<String>,
    /// Extra class for the dialog surface
    #[prop(optional)]
    modal_class: &'static str,
    children: Children,
) -> impl IntoView {
    let modals = use_modals();

    let is_direct_backdrop_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        if is_direct_backdrop_event(&ev) {
            modals.close(id);
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            id=id.dom_id()
            class="modal-backdrop"
            class=("show", move || modals.is_open(id))
            on:click=handle_backdrop_click
        >
            <div class=surface_class role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        title="Close"
                        on:click=move |_| modals.close(id)
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_one() {
        let mut set = ModalSet::default();
        set.open(ModalId::SalePicker);
        assert!(set.is_open(ModalId::SalePicker));
        assert!(!set.is_open(ModalId::StockPicker));

        set.open(ModalId::SalePicker);
        assert_eq!(set.open_count(), 1);

        set.close(ModalId::SalePicker);
        assert!(!set.is_open(ModalId::SalePicker));
        set.close(ModalId::SalePicker);
        assert_eq!(set.open_count(), 0);
    }

    #[test]
    fn test_close_all_closes_every_kind() {
        let mut set = ModalSet::default();
        set.open(ModalId::AddBrand);
        set.open(ModalId::RenameCategory);
        set.open(ModalId::ReturnSale);
        assert_eq!(set.open_count(), 3);

        set.close_all();
        assert_eq!(set.open_count(), 0);
        assert!(!set.is_open(ModalId::AddBrand));
    }

    #[test]
    fn test_dom_ids_are_unique() {
        let ids = [
            ModalId::AddCategory,
            ModalId::RenameCategory,
            ModalId::AddBrand,
            ModalId::RenameBrand,
            ModalId::EditProduct,
            ModalId::StockPicker,
            ModalId::SalePicker,
            ModalId::CustomerPicker,
            ModalId::CustomerCreate,
            ModalId::ReturnSale,
        ];
        let unique: HashSet<&str> = ids.iter().map(|id| id.dom_id()).collect();
        assert_eq!(unique.len(), ids.len());
    }
}
