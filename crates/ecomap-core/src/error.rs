//! Error taxonomy for store access and session validation.

use thiserror::Error;

/// Failures surfaced by the external point store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store handle was never established. Fatal for the session's
    /// data-loading path; rendered as a full-page error with a manual
    /// reload action.
    #[error("point store is not available")]
    Unavailable,
    /// An individual request failed. Recovered locally: a transient
    /// notification is shown and in-memory state stays intact or is rolled
    /// back to its pre-mutation snapshot.
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Client-side rejections; no store call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Add-mode needs a category chosen up front.
    #[error("choose a category before placing a new point")]
    CategoryRequired,
    /// Relocation only makes sense while a point is being edited.
    #[error("no point is being edited")]
    NothingToRelocate,
}
