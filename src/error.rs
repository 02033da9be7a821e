use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// Most "nothing to do" situations (removing from an empty registry, moving
/// with no selection) are deliberate no-ops rather than errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// A shape-kind selector value that names no known primitive.
    #[error("unknown shape kind: {0:?}")]
    InvalidShapeKind(String),
}
