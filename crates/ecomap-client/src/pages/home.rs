//! Main map page: filter and add-point panels, the map surface, the
//! details dialog, the report dialog, and the toast area.

use ecomap_core::{Point, PointId, ProblemReport};
use yew::prelude::*;

use crate::components::{
    AddPointPanel, CategoryFilterPanel, DetailsModal, MapView, ReportModal, ToastArea,
};
use crate::hooks::{use_escape_key, use_points};
use crate::state::{AppAction, AppState, LoadPhase, ToastKind};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let state = use_reducer(AppState::default);
    let points_handle = use_points(state.clone());
    let report_open = use_state(|| false);

    {
        let state = state.clone();
        use_escape_key(Callback::from(move |()| {
            state.dispatch(AppAction::Escape);
        }));
    }

    match &state.phase {
        LoadPhase::Loading => html! {
            <div class="page-loading">{ "Loading recycling points…" }</div>
        },
        LoadPhase::Failed(error) => {
            let on_reload = {
                let on_reload = points_handle.on_reload.clone();
                Callback::from(move |_: MouseEvent| on_reload.emit(()))
            };
            html! {
                <div class="page-error">
                    <h1>{ "Something went wrong" }</h1>
                    <p>{ format!("Could not load recycling points: {error}") }</p>
                    <button onclick={on_reload}>{ "Reload" }</button>
                </div>
            }
        }
        LoadPhase::Ready => {
            let session = &state.session;
            let mode = session.interaction.mode();
            let visible: Vec<Point> = session.visible_points().into_iter().cloned().collect();
            let dialog_point = if session.interaction.dialog_open() {
                session.selected().cloned()
            } else {
                None
            };

            let on_marker_click = {
                let state = state.clone();
                Callback::from(move |id: PointId| {
                    state.dispatch(AppAction::SelectMarker(id));
                })
            };

            let on_toggle_category = {
                let state = state.clone();
                Callback::from(move |id: String| {
                    state.dispatch(AppAction::ToggleCategory(id));
                })
            };

            let on_begin_add = {
                let state = state.clone();
                Callback::from(move |category: Option<String>| {
                    state.dispatch(AppAction::BeginAddPoint(category));
                })
            };

            // Cancelling a placement is exactly what Escape does first.
            let on_cancel_placement = {
                let state = state.clone();
                Callback::from(move |()| {
                    state.dispatch(AppAction::Escape);
                })
            };

            let on_close_dialog = {
                let state = state.clone();
                Callback::from(move |()| {
                    state.dispatch(AppAction::CloseDialog);
                })
            };

            let on_toggle_edit = {
                let state = state.clone();
                Callback::from(move |id: Option<PointId>| {
                    state.dispatch(AppAction::ToggleEdit(id));
                })
            };

            let on_begin_relocation = {
                let state = state.clone();
                Callback::from(move |()| {
                    state.dispatch(AppAction::BeginRelocation);
                })
            };

            let on_open_report = {
                let report_open = report_open.clone();
                Callback::from(move |()| {
                    report_open.set(true);
                })
            };

            let on_close_report = {
                let report_open = report_open.clone();
                Callback::from(move |()| {
                    report_open.set(false);
                })
            };

            let on_report_submitted = {
                let state = state.clone();
                let report_open = report_open.clone();
                Callback::from(move |report: ProblemReport| {
                    tracing::info!(topic = %report.topic, "problem report submitted");
                    report_open.set(false);
                    state.dispatch(AppAction::ShowToast {
                        kind: ToastKind::Info,
                        message: "Thanks! Your report was sent.".to_owned(),
                    });
                })
            };

            let on_dismiss_toast = {
                let state = state.clone();
                Callback::from(move |id: u64| {
                    state.dispatch(AppAction::DismissToast(id));
                })
            };

            html! {
                <div class="app-layout">
                    <aside class="sidebar">
                        <CategoryFilterPanel
                            selected={session.selected_categories.clone()}
                            on_toggle={on_toggle_category}
                        />
                        <AddPointPanel
                            mode={mode}
                            on_begin_add={on_begin_add}
                            on_cancel={on_cancel_placement}
                        />
                    </aside>
                    <MapView
                        points={visible}
                        mode={mode}
                        selected={session.interaction.selected_point.clone()}
                        on_marker_click={on_marker_click}
                        on_map_click={points_handle.on_map_click.clone()}
                    />
                    { dialog_point.map(|point| {
                        let editing = session.interaction.editing_point.as_ref() == Some(&point.id);
                        html! {
                            <DetailsModal
                                point={point}
                                editing={editing}
                                on_close={on_close_dialog}
                                on_toggle_edit={on_toggle_edit}
                                on_apply_patch={points_handle.on_apply_patch.clone()}
                                on_begin_relocation={on_begin_relocation}
                                on_delete={points_handle.on_delete.clone()}
                                on_open_report={on_open_report}
                            />
                        }
                    }).unwrap_or_default() }
                    <ReportModal
                        open={*report_open}
                        on_close={on_close_report}
                        on_submitted={on_report_submitted}
                    />
                    <ToastArea toasts={state.toasts.clone()} on_dismiss={on_dismiss_toast} />
                </div>
            }
        }
    }
}
