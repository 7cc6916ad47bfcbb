//! Error types for tree mutations.

use thiserror::Error;

/// Why a committed node move was rejected.
///
/// Produced only when a drop is committed; live drag previews evaluate the
/// same rules silently and just flip the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot move {label}: the destination is the same as the source")]
    SameLocation { label: String },

    #[error("cannot move {label}: the node is already a child of the destination")]
    AlreadyChild { label: String },

    #[error("cannot move {label}: the destination is a descendant of the source")]
    DestinationIsDescendant { label: String },
}

impl MoveError {
    /// Label of the node that could not be moved.
    pub fn label(&self) -> &str {
        match self {
            MoveError::SameLocation { label }
            | MoveError::AlreadyChild { label }
            | MoveError::DestinationIsDescendant { label } => label,
        }
    }
}
