//! Transient notification area.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{Toast, ToastKind};

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct ToastAreaProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastArea)]
pub fn toast_area(props: &ToastAreaProps) -> Html {
    // Auto-dismiss the newest toast after a delay; clicking dismisses
    // immediately.
    {
        let latest = props.toasts.last().map(|toast| toast.id);
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(latest, move |latest| {
            let timeout =
                latest.map(|id| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(id)));
            move || drop(timeout)
        });
    }

    html! {
        <div class="toast-area">
            { for props.toasts.iter().map(|toast| {
                let kind_class = match toast.kind {
                    ToastKind::Info => "info",
                    ToastKind::Warning => "warning",
                    ToastKind::Error => "error",
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!("toast", kind_class)}
                        onclick={onclick}
                    >
                        { toast.message.clone() }
                    </div>
                }
            })}
        </div>
    }
}
