//! Error types for the interaction engine.

use thiserror::Error;

/// Why an in-progress path was discarded instead of committed.
///
/// None of these are fatal; the candidate is discarded and the reason
/// is surfaced to the user as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathRejection {
    /// The gesture ended over empty workspace.
    #[error("cannot place path here: no target block under cursor")]
    NoTarget,
    /// The gesture ended back on the source block.
    #[error("cannot place path here: path must connect two different blocks")]
    SelfReference,
    /// A path with the same source and target already exists.
    #[error("cannot place path here: these blocks are already connected")]
    Duplicate,
    /// The gesture was released while the cursor was outside the
    /// workspace.
    #[error("cannot place path here: cursor left the workspace")]
    OutsideWorkspace,
}
