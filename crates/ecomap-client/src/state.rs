//! Application state management.
//!
//! A single reducer wraps the core [`Session`]: user events and settled
//! store results come in as [`AppAction`]s, corrective notices and
//! failures fall out as toasts.

use std::rc::Rc;

use ecomap_core::{Notice, Point, PointId, PointPatch, Session, StoreError};
use yew::prelude::*;

/// How the initial point load went.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(StoreError),
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

/// A transient notification shown in the toast area.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Application state: load phase, the interaction session, and toasts.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub phase: LoadPhase,
    pub session: Session,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            session: Session::default(),
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }
}

impl AppState {
    fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
    }

    fn notice_toast(&mut self, notice: Option<Notice>) {
        match notice {
            Some(Notice::FinishEditingFirst) => self.push_toast(
                ToastKind::Warning,
                "Finish editing the current point first.",
            ),
            Some(Notice::PlacementInProgress) => self.push_toast(
                ToastKind::Warning,
                "Click an empty spot on the map to place the point.",
            ),
            None => {}
        }
    }
}

/// Actions that can be dispatched to update the application state.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// A (re)load of the point list started.
    LoadStarted,
    /// The initial fetch succeeded.
    PointsLoaded(Vec<Point>),
    /// The initial fetch failed; fatal for the data-loading path.
    LoadFailed(StoreError),
    /// A marker was clicked.
    SelectMarker(PointId),
    /// Toggle edit mode (see `Session::toggle_edit` for the semantics).
    ToggleEdit(Option<PointId>),
    /// Toggle a category in the filter selection.
    ToggleCategory(String),
    /// Enter add-mode with the chosen category.
    BeginAddPoint(Option<String>),
    /// Enter relocation mode for the point being edited.
    BeginRelocation,
    /// Optimistic local application of a field edit.
    ApplyPatch { id: PointId, patch: PointPatch },
    /// A field edit was rejected by the store; roll back to the snapshot.
    PatchFailed { original: Point, error: StoreError },
    /// The store returned the inserted point.
    InsertCommitted(Point),
    /// The insert was rejected by the store.
    InsertFailed(StoreError),
    /// The relocation update was accepted.
    RelocationCommitted(PointId),
    /// The relocation update was rejected; revert the coordinates.
    RelocationFailed { original: Point, error: StoreError },
    /// The remote delete succeeded.
    PointRemoved(PointId),
    /// The remote delete failed; local state is untouched.
    DeleteFailed(StoreError),
    /// Global cancellation key.
    Escape,
    /// Close the details dialog and reset interaction flags.
    CloseDialog,
    /// Show an arbitrary toast (report confirmations and the like).
    ShowToast { kind: ToastKind, message: String },
    /// Dismiss a toast by id.
    DismissToast(u64),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::LoadStarted => {
                next.phase = LoadPhase::Loading;
            }
            AppAction::PointsLoaded(points) => {
                tracing::info!(count = points.len(), "points loaded");
                next.phase = LoadPhase::Ready;
                next.session = Session::new(points);
            }
            AppAction::LoadFailed(error) => {
                tracing::error!(%error, "initial point load failed");
                next.phase = LoadPhase::Failed(error);
            }
            AppAction::SelectMarker(id) => {
                let notice = next.session.select_marker(id);
                next.notice_toast(notice);
            }
            AppAction::ToggleEdit(id) => {
                next.session.toggle_edit(id);
            }
            AppAction::ToggleCategory(id) => {
                next.session.toggle_category(&id);
            }
            AppAction::BeginAddPoint(category) => {
                if let Err(error) = next.session.begin_add_point(category) {
                    next.push_toast(ToastKind::Warning, error.to_string());
                }
            }
            AppAction::BeginRelocation => {
                if let Err(error) = next.session.begin_relocation() {
                    next.push_toast(ToastKind::Warning, error.to_string());
                }
            }
            AppAction::ApplyPatch { id, patch } => {
                next.session.apply_patch(&id, &patch);
            }
            AppAction::PatchFailed { original, error } => {
                next.session.revert_point(original);
                next.push_toast(ToastKind::Error, format!("Saving failed: {error}"));
            }
            AppAction::InsertCommitted(point) => {
                next.session.insert_committed(point);
            }
            AppAction::InsertFailed(error) => {
                next.session.insert_failed();
                next.push_toast(ToastKind::Error, format!("Adding the point failed: {error}"));
            }
            AppAction::RelocationCommitted(id) => {
                next.session.relocation_committed(id);
            }
            AppAction::RelocationFailed { original, error } => {
                next.session.relocation_failed(original);
                next.push_toast(ToastKind::Error, format!("Moving the point failed: {error}"));
            }
            AppAction::PointRemoved(id) => {
                next.session.remove_point(&id);
                next.push_toast(ToastKind::Info, "Point deleted.");
            }
            AppAction::DeleteFailed(error) => {
                next.push_toast(ToastKind::Error, format!("Deleting the point failed: {error}"));
            }
            AppAction::Escape => {
                let outcome = next.session.escape();
                tracing::debug!(?outcome, "escape");
            }
            AppAction::CloseDialog => {
                next.session.close_dialog();
            }
            AppAction::ShowToast { kind, message } => {
                next.push_toast(kind, message);
            }
            AppAction::DismissToast(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Context type for the application state.
pub type AppStateContext = UseReducerHandle<AppState>;
