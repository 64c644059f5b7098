//! Add-point panel: category selector plus the placement trigger.

use ecomap_core::{CATEGORIES, Mode};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddPointPanelProps {
    pub mode: Mode,
    /// Requests add-mode; `None` when no category is chosen, which the
    /// session rejects with user feedback.
    pub on_begin_add: Callback<Option<String>>,
    pub on_cancel: Callback<()>,
}

#[function_component(AddPointPanel)]
pub fn add_point_panel(props: &AddPointPanelProps) -> Html {
    let category = use_state(String::new);

    let on_select = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                category.set(select.value());
            }
        })
    };

    let adding = props.mode == Mode::AddingNewPoint;

    let on_trigger = {
        let on_begin_add = props.on_begin_add.clone();
        let on_cancel = props.on_cancel.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            if adding {
                on_cancel.emit(());
            } else {
                let value = (*category).clone();
                on_begin_add.emit((!value.is_empty()).then_some(value));
            }
        })
    };

    html! {
        <div class="panel add-point">
            <h3>{ "Add a point" }</h3>
            <select onchange={on_select} disabled={adding}>
                <option value="" selected={category.is_empty()}>{ "Choose category…" }</option>
                { for CATEGORIES.iter().map(|c| html! {
                    <option value={c.id} selected={*category == c.id}>{ c.label }</option>
                })}
            </select>
            <button class={classes!("place-btn", adding.then_some("active"))} onclick={on_trigger}>
                { if adding { "Cancel placement" } else { "Place on map" } }
            </button>
            { if adding {
                html! { <p class="hint">{ "Click the map where the new point should go." }</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
