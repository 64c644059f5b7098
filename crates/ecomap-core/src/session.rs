//! Interaction session.
//!
//! Single source of truth for which interaction mode is active, which point
//! is the subject, the category filter selection, and the in-memory point
//! list mirrored from the store (fetched once at session start; the store
//! stays the durable source of truth).
//!
//! The session is a plain value type and every operation is synchronous.
//! Asynchronous store calls live in the client, which captures a snapshot
//! before an optimistic mutation and feeds the result back through the
//! `*_committed` / `*_failed` operations. Rollback is uniform: any failed
//! update restores the snapshot, coordinates included.

use crate::category::Category;
use crate::error::SessionError;
use crate::point::{NewPoint, Point, PointId, PointPatch};

/// Interaction flags. At most one placement mode (add / relocate) is
/// active at a time; every transition that enters one clears the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub selected_point: Option<PointId>,
    pub editing_point: Option<PointId>,
    pub selecting_location: bool,
    pub adding_new_point: bool,
    pub new_point_category: Option<String>,
}

/// Mutually exclusive interaction mode, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Viewing,
    Editing,
    RelocatingPoint,
    AddingNewPoint,
}

impl InteractionState {
    pub fn mode(&self) -> Mode {
        if self.adding_new_point {
            Mode::AddingNewPoint
        } else if self.selecting_location && self.editing_point.is_some() {
            Mode::RelocatingPoint
        } else if self.editing_point.is_some() {
            Mode::Editing
        } else if self.selected_point.is_some() {
            Mode::Viewing
        } else {
            Mode::Idle
        }
    }

    /// The details dialog is visible whenever a point is selected and no
    /// placement mode hides it.
    pub fn dialog_open(&self) -> bool {
        self.selected_point.is_some() && !self.selecting_location && !self.adding_new_point
    }

    fn clear_placement(&mut self) {
        self.selecting_location = false;
        self.adding_new_point = false;
        self.new_point_category = None;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Corrective feedback for an input that was rejected or redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Another point is being edited; finish or cancel that edit first.
    FinishEditingFirst,
    /// A placement mode is active; the marker click did not change it.
    PlacementInProgress,
}

/// Store mutation requested by a click on empty map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Insert(NewPoint),
    Relocate { id: PointId, x: f64, y: f64 },
}

/// Which case of the Escape priority ladder fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    CancelledAdd,
    CancelledRelocation,
    ClosedDialog,
    NoEffect,
}

/// Session state over one fetched point list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub points: Vec<Point>,
    pub selected_categories: Vec<String>,
    pub interaction: InteractionState,
}

impl Session {
    /// Starts a session over a freshly fetched point list with every
    /// category selected (the "no filter applied" baseline).
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            selected_categories: Category::all_ids(),
            interaction: InteractionState::default(),
        }
    }

    pub fn point(&self, id: &PointId) -> Option<&Point> {
        self.points.iter().find(|p| &p.id == id)
    }

    fn point_mut(&mut self, id: &PointId) -> Option<&mut Point> {
        self.points.iter_mut().find(|p| &p.id == id)
    }

    pub fn selected(&self) -> Option<&Point> {
        self.interaction
            .selected_point
            .as_ref()
            .and_then(|id| self.point(id))
    }

    /// Pure projection of the filter: points whose category is currently
    /// selected. An empty selection set yields an empty result — distinct
    /// from the all-selected baseline at load.
    pub fn visible_points(&self) -> Vec<&Point> {
        self.points
            .iter()
            .filter(|p| self.selected_categories.iter().any(|c| *c == p.category))
            .collect()
    }

    pub fn toggle_category(&mut self, id: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == id) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(id.to_owned());
        }
    }

    /// A marker was clicked.
    ///
    /// In Idle/Viewing this selects the point. While editing another point
    /// the click is rejected. While a placement mode is active the click is
    /// a no-op for mutation purposes and only emits a corrective notice —
    /// except that re-selection stays allowed during relocation, without
    /// cancelling it.
    pub fn select_marker(&mut self, id: PointId) -> Option<Notice> {
        let state = &mut self.interaction;
        if state.adding_new_point {
            return Some(Notice::PlacementInProgress);
        }
        if state.selecting_location {
            state.selected_point = Some(id);
            return Some(Notice::PlacementInProgress);
        }
        if let Some(editing) = &state.editing_point {
            if *editing != id {
                return Some(Notice::FinishEditingFirst);
            }
        }
        state.selected_point = Some(id);
        None
    }

    /// Toggles edit mode.
    ///
    /// `None` always exits edit mode and cancels a pending relocation.
    /// Toggling the current editing id exits edit mode unless a relocation
    /// is underway. A different id switches the editing subject and
    /// re-syncs the selection to it, so the dialog shows the fresh local
    /// copy rather than a stale reference.
    pub fn toggle_edit(&mut self, id: Option<PointId>) {
        let state = &mut self.interaction;
        match id {
            None => {
                state.editing_point = None;
                state.selecting_location = false;
            }
            Some(id) if state.editing_point.as_ref() == Some(&id) => {
                if !state.selecting_location {
                    state.editing_point = None;
                }
            }
            Some(id) => {
                state.clear_placement();
                state.selected_point = Some(id.clone());
                state.editing_point = Some(id);
            }
        }
    }

    /// Enters add-mode. Rejected without a category; rejection changes
    /// nothing, so repeating it is idempotent.
    pub fn begin_add_point(&mut self, category: Option<String>) -> Result<(), SessionError> {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return Err(SessionError::CategoryRequired);
        };
        tracing::debug!(%category, "entering add-point mode");
        let state = &mut self.interaction;
        state.selecting_location = false;
        state.adding_new_point = true;
        state.new_point_category = Some(category);
        Ok(())
    }

    /// Enters relocation mode for the point being edited. The dialog hides
    /// until the next map click settles or the relocation is cancelled.
    pub fn begin_relocation(&mut self) -> Result<(), SessionError> {
        let state = &mut self.interaction;
        if state.editing_point.is_none() {
            return Err(SessionError::NothingToRelocate);
        }
        state.adding_new_point = false;
        state.new_point_category = None;
        state.selecting_location = true;
        Ok(())
    }

    /// Dispatches a click on empty map surface, with coordinates already
    /// normalized and clamped by the viewport transform. Returns the store
    /// mutation to issue, if the current mode places anything; the mode
    /// itself only changes once the mutation settles.
    pub fn map_click(&self, x: f64, y: f64) -> Option<Placement> {
        let state = &self.interaction;
        if state.adding_new_point {
            let category = state.new_point_category.clone()?;
            return Some(Placement::Insert(NewPoint::placed(category, x, y)));
        }
        if state.selecting_location {
            let id = state.editing_point.clone()?;
            return Some(Placement::Relocate { id, x, y });
        }
        None
    }

    /// Applies a patch optimistically and returns the pre-edit snapshot to
    /// roll back to if the store rejects the update.
    pub fn apply_patch(&mut self, id: &PointId, patch: &PointPatch) -> Option<Point> {
        let point = self.point_mut(id)?;
        let snapshot = point.clone();
        patch.apply_to(point);
        Some(snapshot)
    }

    /// Restores a snapshot after a failed update.
    pub fn revert_point(&mut self, original: Point) {
        if let Some(point) = self.point_mut(&original.id) {
            *point = original;
        }
    }

    /// The store returned the new point: append it and land in Editing on
    /// it so the user can fill in the details.
    pub fn insert_committed(&mut self, point: Point) {
        tracing::debug!(id = %point.id, "point inserted");
        let id = point.id.clone();
        self.points.push(point);
        let state = &mut self.interaction;
        state.clear_placement();
        state.selected_point = Some(id.clone());
        state.editing_point = Some(id);
    }

    /// The insert never made it to the store; placement mode resets.
    pub fn insert_failed(&mut self) {
        self.interaction.clear_placement();
    }

    /// Relocation stored successfully: back to Editing on the moved point,
    /// selection synced.
    pub fn relocation_committed(&mut self, id: PointId) {
        let state = &mut self.interaction;
        state.selecting_location = false;
        state.selected_point = Some(id.clone());
        state.editing_point = Some(id);
    }

    /// Relocation rejected by the store: revert the optimistic coordinate
    /// change and return to Editing on the point where it was.
    pub fn relocation_failed(&mut self, original: Point) {
        let id = original.id.clone();
        self.revert_point(original);
        let state = &mut self.interaction;
        state.selecting_location = false;
        state.selected_point = Some(id.clone());
        state.editing_point = Some(id);
    }

    /// Removes a point after the remote delete succeeded. Removing an id
    /// that is already gone is success-equivalent. The dialog closes.
    pub fn remove_point(&mut self, id: &PointId) {
        tracing::debug!(%id, "point removed");
        self.points.retain(|p| &p.id != id);
        self.interaction.reset();
    }

    /// Escape priority ladder; only the highest applicable case fires.
    pub fn escape(&mut self) -> EscapeOutcome {
        let state = &mut self.interaction;
        if state.adding_new_point {
            state.adding_new_point = false;
            state.new_point_category = None;
            return EscapeOutcome::CancelledAdd;
        }
        if state.selecting_location {
            state.selecting_location = false;
            // Re-selection is allowed during relocation, so the dialog must
            // come back on the point being edited, not the last-clicked one.
            state.selected_point = state.editing_point.clone();
            return EscapeOutcome::CancelledRelocation;
        }
        if state.selected_point.is_some() && state.editing_point.is_none() {
            state.reset();
            return EscapeOutcome::ClosedDialog;
        }
        EscapeOutcome::NoEffect
    }

    /// Full interaction reset; the point list is untouched.
    pub fn close_dialog(&mut self) {
        self.interaction.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    fn point(id: &str, category: &str, x: f64, y: f64) -> Point {
        Point {
            id: PointId::from(id),
            name: format!("Point {id}"),
            category: category.to_owned(),
            x,
            y,
            description: String::new(),
        }
    }

    fn session() -> Session {
        Session::new(vec![
            point("abc", "glass", 10.0, 10.0),
            point("def", "plastic", 50.0, 50.0),
            point("ghi", "paper", 90.0, 90.0),
        ])
    }

    #[test]
    fn fresh_session_shows_everything() {
        let session = session();
        assert_eq!(session.interaction.mode(), Mode::Idle);
        assert_eq!(session.visible_points().len(), 3);
    }

    #[test]
    fn filter_projects_selected_categories() {
        let mut session = session();
        session.toggle_category("plastic");

        let visible: Vec<_> = session.visible_points().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, ["abc", "ghi"]);

        session.toggle_category("plastic");
        assert_eq!(session.visible_points().len(), 3);
    }

    #[test]
    fn empty_filter_selection_shows_nothing() {
        let mut session = session();
        for id in Category::all_ids() {
            session.toggle_category(&id);
        }
        assert!(session.selected_categories.is_empty());
        assert!(session.visible_points().is_empty());
    }

    #[test]
    fn selecting_a_marker_opens_the_dialog() {
        let mut session = session();
        assert_eq!(session.select_marker(PointId::from("abc")), None);
        assert_eq!(session.interaction.mode(), Mode::Viewing);
        assert!(session.interaction.dialog_open());
        assert_eq!(session.selected().unwrap().id.as_str(), "abc");
    }

    #[test]
    fn marker_click_is_blocked_while_editing_another_point() {
        let mut session = session();
        session.select_marker(PointId::from("abc"));
        session.toggle_edit(Some(PointId::from("abc")));

        let notice = session.select_marker(PointId::from("def"));
        assert_eq!(notice, Some(Notice::FinishEditingFirst));
        assert_eq!(session.interaction.selected_point, Some(PointId::from("abc")));
        assert_eq!(session.interaction.mode(), Mode::Editing);
    }

    #[test]
    fn marker_click_is_a_noop_while_adding() {
        let mut session = session();
        session.begin_add_point(Some("glass".to_owned())).unwrap();

        let notice = session.select_marker(PointId::from("abc"));
        assert_eq!(notice, Some(Notice::PlacementInProgress));
        assert_eq!(session.interaction.mode(), Mode::AddingNewPoint);
        assert_eq!(session.interaction.selected_point, None);
    }

    #[test]
    fn reselection_is_allowed_during_relocation_without_cancelling_it() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();

        let notice = session.select_marker(PointId::from("def"));
        assert_eq!(notice, Some(Notice::PlacementInProgress));
        assert_eq!(session.interaction.selected_point, Some(PointId::from("def")));
        assert_eq!(session.interaction.mode(), Mode::RelocatingPoint);
    }

    #[test]
    fn add_mode_without_category_is_an_idempotent_rejection() {
        let mut session = session();
        let before = session.clone();

        assert_eq!(
            session.begin_add_point(None),
            Err(SessionError::CategoryRequired)
        );
        assert_eq!(
            session.begin_add_point(Some(String::new())),
            Err(SessionError::CategoryRequired)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn placement_modes_are_mutually_exclusive() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();

        session.begin_add_point(Some("metal".to_owned())).unwrap();
        assert!(!session.interaction.selecting_location);
        assert_eq!(session.interaction.mode(), Mode::AddingNewPoint);

        session.begin_relocation().unwrap();
        assert!(!session.interaction.adding_new_point);
        assert_eq!(session.interaction.new_point_category, None);
        assert_eq!(session.interaction.mode(), Mode::RelocatingPoint);
    }

    #[test]
    fn toggle_edit_with_null_always_exits_and_cancels_relocation() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();

        session.toggle_edit(None);
        assert_eq!(session.interaction.editing_point, None);
        assert!(!session.interaction.selecting_location);
    }

    #[test]
    fn toggling_the_current_id_exits_unless_relocating() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();

        session.toggle_edit(Some(PointId::from("abc")));
        assert_eq!(session.interaction.mode(), Mode::RelocatingPoint);

        session.escape();
        session.toggle_edit(Some(PointId::from("abc")));
        assert_eq!(session.interaction.editing_point, None);
    }

    #[test]
    fn switching_the_editing_subject_syncs_the_selection() {
        let mut session = session();
        session.select_marker(PointId::from("abc"));
        session.toggle_edit(Some(PointId::from("abc")));

        session.toggle_edit(Some(PointId::from("def")));
        assert_eq!(session.interaction.editing_point, Some(PointId::from("def")));
        assert_eq!(session.interaction.selected_point, Some(PointId::from("def")));
        assert_eq!(session.interaction.mode(), Mode::Editing);
    }

    #[test]
    fn add_point_scenario() {
        let mut session = session();
        session.begin_add_point(Some("glass".to_owned())).unwrap();

        let placement = session.map_click(30.0, 40.0).unwrap();
        let Placement::Insert(new_point) = placement else {
            panic!("expected an insert placement");
        };
        assert_eq!(new_point, NewPoint::placed("glass", 30.0, 40.0));
        assert_eq!(new_point.name, "New Recycling Point");

        // Store assigns the id; the controller lands in Editing on it.
        session.insert_committed(point("p9", "glass", 30.0, 40.0));
        assert_eq!(session.interaction.mode(), Mode::Editing);
        assert_eq!(session.interaction.editing_point, Some(PointId::from("p9")));
        assert_eq!(session.interaction.selected_point, Some(PointId::from("p9")));
        assert!(session.interaction.dialog_open());
        assert_eq!(session.points.len(), 4);
    }

    #[test]
    fn failed_insert_resets_placement_mode() {
        let mut session = session();
        session.begin_add_point(Some("glass".to_owned())).unwrap();

        session.insert_failed();
        assert_eq!(session.interaction.mode(), Mode::Idle);
        assert_eq!(session.interaction.new_point_category, None);
        assert_eq!(session.points.len(), 3);
    }

    #[test]
    fn relocation_transitions_back_to_editing_with_clamped_coordinates() {
        let mut session = session();
        let id = PointId::from("abc");
        session.toggle_edit(Some(id.clone()));
        session.begin_relocation().unwrap();
        assert!(!session.interaction.dialog_open());

        // Click-derived percentages come through the viewport transform.
        let viewport = Viewport::default();
        let (x, y) = viewport.to_percent((2000.0, 300.0), (0.0, 0.0), (1600.0, 1200.0));
        let placement = session.map_click(x, y).unwrap();
        assert_eq!(
            placement,
            Placement::Relocate {
                id: id.clone(),
                x: 100.0,
                y: 25.0
            }
        );

        let snapshot = session
            .apply_patch(&id, &PointPatch::relocate(x, y))
            .unwrap();
        assert_eq!((snapshot.x, snapshot.y), (10.0, 10.0));

        session.relocation_committed(id.clone());
        assert_eq!(session.interaction.editing_point, Some(id.clone()));
        assert!(!session.interaction.selecting_location);
        let moved = session.point(&id).unwrap();
        assert_eq!((moved.x, moved.y), (100.0, 25.0));
    }

    #[test]
    fn failed_relocation_reverts_and_returns_to_editing() {
        let mut session = session();
        let id = PointId::from("abc");
        session.toggle_edit(Some(id.clone()));
        session.begin_relocation().unwrap();

        let snapshot = session
            .apply_patch(&id, &PointPatch::relocate(70.0, 80.0))
            .unwrap();
        session.relocation_failed(snapshot);

        let restored = session.point(&id).unwrap();
        assert_eq!((restored.x, restored.y), (10.0, 10.0));
        assert_eq!(session.interaction.mode(), Mode::Editing);
        assert!(session.interaction.dialog_open());
    }

    #[test]
    fn failed_field_edit_rolls_back_uniformly() {
        let mut session = session();
        let id = PointId::from("def");

        let snapshot = session
            .apply_patch(&id, &PointPatch::rename("Renamed"))
            .unwrap();
        assert_eq!(session.point(&id).unwrap().name, "Renamed");

        session.revert_point(snapshot);
        assert_eq!(session.point(&id).unwrap().name, "Point def");
    }

    #[test]
    fn delete_scenario() {
        let mut session = session();
        let id = PointId::from("abc");
        session.select_marker(id.clone());
        session.toggle_edit(Some(id.clone()));

        session.remove_point(&id);
        assert!(session.point(&id).is_none());
        assert!(!session.interaction.dialog_open());
        assert_eq!(session.interaction.mode(), Mode::Idle);

        // Deleting an id that is already gone is success-equivalent.
        session.remove_point(&id);
        assert_eq!(session.points.len(), 2);
    }

    #[test]
    fn escape_cancels_add_mode_first() {
        let mut session = session();
        session.begin_add_point(Some("glass".to_owned())).unwrap();

        assert_eq!(session.escape(), EscapeOutcome::CancelledAdd);
        assert_eq!(session.interaction.new_point_category, None);
        assert_eq!(session.interaction.mode(), Mode::Idle);
        // No placement is pending any more, so no store call is issued.
        assert_eq!(session.map_click(30.0, 40.0), None);
    }

    #[test]
    fn escape_cancels_relocation_and_restores_the_dialog() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();
        assert!(!session.interaction.dialog_open());

        assert_eq!(session.escape(), EscapeOutcome::CancelledRelocation);
        assert_eq!(session.interaction.mode(), Mode::Editing);
        assert!(session.interaction.dialog_open());
    }

    #[test]
    fn escape_after_reselection_restores_the_dialog_to_the_edited_point() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));
        session.begin_relocation().unwrap();
        session.select_marker(PointId::from("def"));

        assert_eq!(session.escape(), EscapeOutcome::CancelledRelocation);
        assert_eq!(session.interaction.selected_point, Some(PointId::from("abc")));
        assert_eq!(session.interaction.mode(), Mode::Editing);
        assert!(session.interaction.dialog_open());

        // The restored dialog is the one being edited, so marker clicks on
        // other points are rejected as usual.
        let notice = session.select_marker(PointId::from("def"));
        assert_eq!(notice, Some(Notice::FinishEditingFirst));
        assert_eq!(session.interaction.selected_point, Some(PointId::from("abc")));
    }

    #[test]
    fn escape_closes_the_dialog_when_viewing() {
        let mut session = session();
        session.select_marker(PointId::from("abc"));

        assert_eq!(session.escape(), EscapeOutcome::ClosedDialog);
        assert_eq!(session.interaction, InteractionState::default());
    }

    #[test]
    fn escape_does_nothing_while_editing() {
        let mut session = session();
        session.toggle_edit(Some(PointId::from("abc")));

        assert_eq!(session.escape(), EscapeOutcome::NoEffect);
        assert_eq!(session.interaction.mode(), Mode::Editing);
    }

    #[test]
    fn map_click_outside_placement_modes_requests_nothing() {
        let mut session = session();
        assert_eq!(session.map_click(30.0, 40.0), None);

        session.select_marker(PointId::from("abc"));
        assert_eq!(session.map_click(30.0, 40.0), None);

        session.toggle_edit(Some(PointId::from("abc")));
        assert_eq!(session.map_click(30.0, 40.0), None);
    }
}
