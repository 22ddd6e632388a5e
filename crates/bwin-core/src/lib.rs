#![forbid(unsafe_code)]

//! Core: geometry primitives and pointer zone classification.
//!
//! # Role in binary-window
//! `bwin-core` holds the pieces that need no knowledge of the sash tree:
//! floating-point rectangles and points, and the [`ZoneClassifier`] that the
//! drop layer calls on every drag-hover frame.
//!
//! The tree itself lives in `bwin-layout`, which re-exports these types.

pub mod geometry;
pub mod zone;

pub use geometry::{EPSILON, Point, Rect, approx_eq};
pub use zone::{Zone, ZoneClassifier, ZoneClassifierError};
