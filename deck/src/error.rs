//! Errors raised by deck editing operations.

use crate::model::{ElementId, ElementKind, SlideId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The last remaining slide cannot be deleted. The message is user-facing.
    #[error("Cannot delete the only slide. Delete the presentation instead.")]
    LastSlide,
    #[error("slide index {index} out of range ({len} slides)")]
    SlideOutOfRange { index: usize, len: usize },
    #[error("slide not found: {0}")]
    SlideNotFound(SlideId),
    #[error("{kind} not found: {id}")]
    ElementNotFound { kind: ElementKind, id: ElementId },
    #[error("new slide order is not a permutation of the current slides")]
    NotAPermutation,
}
