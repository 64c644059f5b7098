//! Details dialog for the selected point.
//!
//! Read-only while viewing; name/category/description become editable in
//! edit mode, with each field committed as its own partial update the
//! moment it changes. Also hosts the relocate, delete (two-step confirm)
//! and report actions.

use ecomap_core::{CATEGORIES, Category, Point, PointId, PointPatch};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct DetailsModalProps {
    pub point: Point,
    pub editing: bool,
    pub on_close: Callback<()>,
    pub on_toggle_edit: Callback<Option<PointId>>,
    pub on_apply_patch: Callback<(PointId, PointPatch)>,
    pub on_begin_relocation: Callback<()>,
    pub on_delete: Callback<PointId>,
    pub on_open_report: Callback<()>,
}

#[function_component(DetailsModal)]
pub fn details_modal(props: &DetailsModalProps) -> Html {
    let confirm_delete = use_state(|| false);

    // Drop a pending delete confirmation when the subject changes.
    {
        let confirm_delete = confirm_delete.clone();
        use_effect_with(props.point.id.clone(), move |_| {
            confirm_delete.set(false);
        });
    }

    let point = &props.point;
    let category = Category::find(&point.category);

    let on_toggle_edit = {
        let callback = props.on_toggle_edit.clone();
        let id = point.id.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(Some(id.clone()));
        })
    };

    let on_name_change = {
        let callback = props.on_apply_patch.clone();
        let id = point.id.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                callback.emit((id.clone(), PointPatch::rename(input.value())));
            }
        })
    };

    let on_category_change = {
        let callback = props.on_apply_patch.clone();
        let id = point.id.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                callback.emit((id.clone(), PointPatch::recategorize(select.value())));
            }
        })
    };

    let on_description_change = {
        let callback = props.on_apply_patch.clone();
        let id = point.id.clone();
        Callback::from(move |e: Event| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                callback.emit((id.clone(), PointPatch::describe(area.value())));
            }
        })
    };

    let on_relocate = {
        let callback = props.on_begin_relocation.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let on_delete_click = {
        let confirm_delete = confirm_delete.clone();
        let on_delete = props.on_delete.clone();
        let id = point.id.clone();
        Callback::from(move |_: MouseEvent| {
            if *confirm_delete {
                on_delete.emit(id.clone());
            } else {
                confirm_delete.set(true);
            }
        })
    };

    let on_open_report = {
        let callback = props.on_open_report.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let category_badge = category.map_or_else(
        || html! { <span class="category-badge">{ &point.category }</span> },
        |c| {
            html! {
                <span class="category-badge" style={format!("color: {};", c.color)}>
                    { c.label }
                </span>
            }
        },
    );

    let description = if point.description.is_empty() {
        "No description yet.".to_owned()
    } else {
        point.description.clone()
    };

    let body = if props.editing {
        html! {
            <div class="point-form">
                <label>{ "Name" }
                    <input type="text" value={point.name.clone()} onchange={on_name_change} />
                </label>
                <label>{ "Category" }
                    <select onchange={on_category_change}>
                        { for CATEGORIES.iter().map(|c| html! {
                            <option value={c.id} selected={point.category == c.id}>{ c.label }</option>
                        })}
                    </select>
                </label>
                <label>{ "Description" }
                    <textarea value={point.description.clone()} onchange={on_description_change} />
                </label>
                <button class="relocate-btn" onclick={on_relocate}>
                    { "Change location on the map" }
                </button>
            </div>
        }
    } else {
        html! {
            <div class="point-details">
                { category_badge }
                <p class="description">{ description }</p>
            </div>
        }
    };

    html! {
        <Modal
            open=true
            title={point.name.clone()}
            onclose={props.on_close.clone()}
            class={classes!("details-modal")}
        >
            { body }
            <div class="dialog-actions">
                <button onclick={on_toggle_edit}>
                    { if props.editing { "Done" } else { "Edit" } }
                </button>
                <button class="report-btn" onclick={on_open_report}>
                    { "Report a problem" }
                </button>
                <button class="delete-btn" onclick={on_delete_click}>
                    { if *confirm_delete { "Really delete?" } else { "Delete" } }
                </button>
            </div>
        </Modal>
    }
}
