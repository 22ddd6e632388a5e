#![forbid(unsafe_code)]

//! Errors raised by sash tree operations.
//!
//! Every variant aborts the operation before the tree is touched. Resize
//! requests that would cross a minimum are not errors; they clamp.

use crate::position::SplitAxis;

/// Structural and argument errors for [`SashTree`](crate::SashTree) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SashError {
    #[error("invalid position {value:?}: expected top, right, bottom or left")]
    InvalidPosition { value: String },

    #[error("sash {id:?} not found")]
    SashNotFound { id: String },

    #[error("sash {id:?} is not a leaf")]
    SashNotLeaf { id: String },

    #[error("sash {id:?} is not a container")]
    SashNotContainer { id: String },

    #[error("cannot remove root sash {id:?}")]
    CannotRemoveRoot { id: String },

    #[error("duplicate sash id {id:?}")]
    DuplicateId { id: String },

    #[error("invalid {field} {value}: sizes must be finite and > 0, offsets finite")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error(
        "cannot split sash {id:?} along {axis:?}: {available} available, {required} required"
    )]
    InsufficientSpace {
        id: String,
        axis: SplitAxis,
        available: f64,
        required: f64,
    },
}

impl SashError {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::SashNotFound { id: id.to_string() }
    }

    pub(crate) fn not_leaf(id: &str) -> Self {
        Self::SashNotLeaf { id: id.to_string() }
    }
}

/// Reject non-finite or non-positive sizes.
pub(crate) fn check_size(field: &'static str, value: f64) -> Result<f64, SashError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SashError::InvalidDimension { field, value })
    }
}

/// Reject non-finite offsets.
pub(crate) fn check_offset(field: &'static str, value: f64) -> Result<f64, SashError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SashError::InvalidDimension { field, value })
    }
}
