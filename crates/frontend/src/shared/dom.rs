//! Small browser helpers. Every one of them is a no-op when the window,
//! document or target element is missing.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Run `f` on the next tick, after pending DOM updates have been flushed.
pub fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        f();
    });
}

/// Smooth-scroll the element with `id` into view on the next tick.
pub fn scroll_to_id(id: &'static str) {
    defer(move || {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// Focus an input on the next tick (it may still be inside a hidden modal).
pub fn focus_input(input_ref: NodeRef<Input>) {
    defer(move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    });
}

/// Blocking browser alert for recoverable user errors.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full page navigation.
pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().assign(url);
    }
}
