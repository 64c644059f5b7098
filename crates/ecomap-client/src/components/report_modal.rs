//! Problem report dialog.
//!
//! Reports are ephemeral: submission hands the report to the owner, which
//! raises a confirmation toast. An optional photo is inlined as a base64
//! data URI.

use ecomap_core::{ProblemReport, REPORT_TOPICS};
use gloo::file::File;
use gloo::file::callbacks::FileReader;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct ReportModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_submitted: Callback<ProblemReport>,
}

#[function_component(ReportModal)]
pub fn report_modal(props: &ReportModalProps) -> Html {
    let topic = use_state(String::new);
    let description = use_state(String::new);
    let photo = use_state(|| None::<String>);
    // Keeps the in-flight reader alive until its callback fires.
    let reader = use_mut_ref(|| None::<FileReader>);

    let on_topic_change = {
        let topic = topic.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                topic.set(select.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                description.set(area.value());
            }
        })
    };

    let on_file_change = {
        let photo = photo.clone();
        let reader = reader.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = File::from(file);
            let photo = photo.clone();
            *reader.borrow_mut() = Some(gloo::file::callbacks::read_as_data_url(
                &file,
                move |result| match result {
                    Ok(data_uri) => photo.set(Some(data_uri)),
                    Err(error) => tracing::warn!(%error, "failed to read report photo"),
                },
            ));
        })
    };

    let on_submit = {
        let topic = topic.clone();
        let description = description.clone();
        let photo = photo.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |_: MouseEvent| {
            let report = ProblemReport {
                topic: (*topic).clone(),
                description: (*description).clone(),
                photo_data_uri: (*photo).clone(),
            };
            if !report.is_submittable() {
                return;
            }
            on_submitted.emit(report);
            topic.set(String::new());
            description.set(String::new());
            photo.set(None);
        })
    };

    let submittable = !topic.is_empty();

    html! {
        <Modal
            open={props.open}
            title="Report a problem"
            onclose={props.on_close.clone()}
            class={classes!("report-modal")}
        >
            <div class="report-form">
                <label>{ "What is wrong?" }
                    <select onchange={on_topic_change}>
                        <option value="" selected={topic.is_empty()}>{ "Choose a topic…" }</option>
                        { for REPORT_TOPICS.iter().map(|t| html! {
                            <option value={*t} selected={*topic == *t}>{ *t }</option>
                        })}
                    </select>
                </label>
                <label>{ "Details" }
                    <textarea value={(*description).clone()} onchange={on_description_change} />
                </label>
                <label>{ "Photo (optional)" }
                    <input type="file" accept="image/*" onchange={on_file_change} />
                </label>
                { photo.as_ref().map(|data_uri| html! {
                    <img class="report-photo-preview" src={data_uri.clone()} alt="Attached photo" />
                }).unwrap_or_default() }
                <button class="submit-btn" onclick={on_submit} disabled={!submittable}>
                    { "Send report" }
                </button>
            </div>
        </Modal>
    }
}
