//! Global Escape handling.
//!
//! Attaches a document-level keydown listener and emits on Escape. Events
//! originating in form fields are left alone so text editing keeps its
//! native behavior.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Check if the event target is a form field (input, textarea, select).
fn is_form_field(event: &KeyboardEvent) -> bool {
    if let Some(target) = event.target() {
        if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
            let tag_name = element.tag_name().to_lowercase();
            return matches!(tag_name.as_str(), "input" | "textarea" | "select");
        }
    }
    false
}

/// Hook emitting `on_escape` whenever Escape is pressed outside a form
/// field.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    let listener_ref = use_mut_ref(|| None::<EventListener>);

    use_effect_with(on_escape, move |on_escape| {
        // Clean up previous listener
        *listener_ref.borrow_mut() = None;

        let on_escape = on_escape.clone();
        let document = gloo::utils::document();

        let listener = EventListener::new(&document, "keydown", move |event| {
            let event = event.dyn_ref::<KeyboardEvent>().unwrap();

            if is_form_field(event) {
                return;
            }

            if event.key() == "Escape" {
                event.prevent_default();
                on_escape.emit(());
            }
        });

        *listener_ref.borrow_mut() = Some(listener);
    });
}
