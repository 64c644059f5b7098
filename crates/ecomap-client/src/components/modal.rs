//! Common modal component.

use yew::prelude::*;

/// Props for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Controlled visibility; owners derive this from session state.
    pub open: bool,
    /// Modal content.
    pub children: Children,
    /// Optional modal title (displayed in header).
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub onclose: Callback<()>,
    /// Whether clicking the overlay closes the modal.
    #[prop_or(true)]
    pub overlay_click_closes: bool,
    /// Additional CSS classes for the modal container.
    #[prop_or_default]
    pub class: Classes,
}

/// Modal dialog shell with header, close button, and overlay click
/// handling.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let onclose = props.onclose.clone();
        let overlay_click_closes = props.overlay_click_closes;
        Callback::from(move |_: MouseEvent| {
            if overlay_click_closes {
                onclose.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_button_click = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| {
            onclose.emit(());
        })
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={classes!("modal", props.class.clone())} onclick={on_modal_click}>
                <div class="modal-header">
                    { props.title.clone().map(|title| html! { <h2>{ title }</h2> }).unwrap_or_default() }
                    <button class="modal-close-btn" onclick={on_close_button_click}>
                        { "×" }
                    </button>
                </div>
                <div class="modal-content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
