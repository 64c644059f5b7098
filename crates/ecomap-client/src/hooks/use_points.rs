//! Point loading and mutation wiring.
//!
//! Bridges the synchronous session reducer and the asynchronous store
//! adapter: callbacks dispatch the optimistic action, fire the store call
//! with `spawn_local`, and dispatch the settled action when it resolves.
//! A snapshot is captured before every optimistic update so a failure can
//! roll the point back.

use std::rc::Rc;

use ecomap_core::{Placement, PointId, PointPatch, StoreError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::PointStoreService;
use crate::state::{AppAction, AppStateContext};

/// Store-bound callbacks for the map page.
#[derive(Clone, PartialEq)]
pub struct PointsHandle {
    /// Click on empty map surface, coordinates already normalized.
    pub on_map_click: Callback<(f64, f64)>,
    /// Optimistic field edit followed by a partial update.
    pub on_apply_patch: Callback<(PointId, PointPatch)>,
    /// Remote delete; local state only changes on success.
    pub on_delete: Callback<PointId>,
    /// Manual reload after a fatal load failure.
    pub on_reload: Callback<()>,
}

/// Store handle for the session, established once.
#[hook]
pub fn use_point_store() -> Rc<Result<PointStoreService, StoreError>> {
    use_memo((), |_| PointStoreService::from_window())
}

/// Hook performing the initial fetch and exposing mutation callbacks.
#[hook]
pub fn use_points(state: AppStateContext) -> PointsHandle {
    let store = use_point_store();

    let load = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(): ()| match store.as_ref() {
            Ok(store) => {
                let state = state.clone();
                let store = store.clone();
                spawn_local(async move {
                    match store.fetch_all().await {
                        Ok(points) => state.dispatch(AppAction::PointsLoaded(points)),
                        Err(error) => state.dispatch(AppAction::LoadFailed(error)),
                    }
                });
            }
            Err(error) => state.dispatch(AppAction::LoadFailed(error.clone())),
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
        });
    }

    let on_reload = {
        let state = state.clone();
        let load = load.clone();
        Callback::from(move |(): ()| {
            state.dispatch(AppAction::LoadStarted);
            load.emit(());
        })
    };

    let on_map_click = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(x, y): (f64, f64)| {
            let Some(placement) = state.session.map_click(x, y) else {
                return;
            };
            let Ok(store) = store.as_ref() else {
                return;
            };
            let store = store.clone();
            let state = state.clone();
            match placement {
                Placement::Insert(new_point) => {
                    spawn_local(async move {
                        match store.insert(&new_point).await {
                            Ok(point) => state.dispatch(AppAction::InsertCommitted(point)),
                            Err(error) => state.dispatch(AppAction::InsertFailed(error)),
                        }
                    });
                }
                Placement::Relocate { id, x, y } => {
                    let Some(original) = state.session.point(&id).cloned() else {
                        return;
                    };
                    let patch = PointPatch::relocate(x, y);
                    state.dispatch(AppAction::ApplyPatch {
                        id: id.clone(),
                        patch: patch.clone(),
                    });
                    spawn_local(async move {
                        match store.update_fields(&id, &patch).await {
                            Ok(()) => state.dispatch(AppAction::RelocationCommitted(id)),
                            Err(error) => {
                                state.dispatch(AppAction::RelocationFailed { original, error });
                            }
                        }
                    });
                }
            }
        })
    };

    let on_apply_patch = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(id, patch): (PointId, PointPatch)| {
            if patch.is_empty() {
                return;
            }
            let Ok(store) = store.as_ref() else {
                return;
            };
            let Some(original) = state.session.point(&id).cloned() else {
                return;
            };
            let store = store.clone();
            let state = state.clone();
            state.dispatch(AppAction::ApplyPatch {
                id: id.clone(),
                patch: patch.clone(),
            });
            spawn_local(async move {
                if let Err(error) = store.update_fields(&id, &patch).await {
                    state.dispatch(AppAction::PatchFailed { original, error });
                }
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |id: PointId| {
            let Ok(store) = store.as_ref() else {
                return;
            };
            let store = store.clone();
            let state = state.clone();
            spawn_local(async move {
                match store.delete(&id).await {
                    Ok(()) => state.dispatch(AppAction::PointRemoved(id)),
                    Err(error) => state.dispatch(AppAction::DeleteFailed(error)),
                }
            });
        })
    };

    PointsHandle {
        on_map_click,
        on_apply_patch,
        on_delete,
        on_reload,
    }
}
