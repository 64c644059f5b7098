//! Ecomap Core Library
//!
//! Headless domain logic for the recycling-point map catalog: the point and
//! category data model, the interaction session (mode state machine plus
//! optimistic mutation policy over the in-memory point list), the map
//! viewport coordinate transform, and the store error taxonomy.
//!
//! This crate has no wasm dependencies; everything here runs under native
//! `cargo test`. The Yew client wires user events and store results into
//! the session and renders what falls out.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod error;
pub mod point;
pub mod report;
pub mod session;
pub mod viewport;

pub use category::{CATEGORIES, Category};
pub use error::{SessionError, StoreError};
pub use point::{DEFAULT_POINT_NAME, NewPoint, Point, PointId, PointPatch};
pub use report::{ProblemReport, REPORT_TOPICS};
pub use session::{EscapeOutcome, InteractionState, Mode, Notice, Placement, Session};
pub use viewport::{MAX_SCALE, MIN_SCALE, SCALE_STEP, Viewport};
