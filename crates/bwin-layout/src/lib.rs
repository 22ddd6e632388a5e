#![forbid(unsafe_code)]

//! Binary space-partitioning sash tree for tiling window panes.
//!
//! A [`SashTree`] divides a rectangle into non-overlapping panes. Every
//! node is a [`Sash`]: leaves are panes carrying a [`Store`] payload, and
//! containers hold exactly two children split left/right or top/bottom.
//!
//! ```
//! use bwin_layout::{Position, Rect, SashTree, SplitSize};
//!
//! let mut tree = SashTree::new(Rect::from_size(800.0, 600.0))?;
//! let root = tree.root().id().to_string();
//! let split = tree.split(&root, Position::Right, SplitSize::Ratio(0.25))?;
//! assert_eq!(tree.get_by_id(&split.created).map(|s| s.width()), Some(200.0));
//!
//! tree.set_width(&root, 1000.0)?;
//! tree.check_invariants()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Resizing cascades through the subtree using each container's
//! [`ResizeStrategy`] and clamps against [`min_width_of`] /
//! [`min_height_of`]. Drag-and-drop hosts use [`SashTree::drop_intent`] and
//! [`SashTree::apply_drop`]; divider handles come from
//! [`SashTree::muntins`].
//!
//! [`min_width_of`]: SashTree::min_width_of
//! [`min_height_of`]: SashTree::min_height_of

pub mod config;
mod constraint;
pub mod drop;
pub mod error;
pub mod invariant;
pub mod muntin;
pub mod position;
mod propagate;
pub mod sash;
pub mod store;
pub mod strategy;
pub mod tree;

pub use bwin_core::{EPSILON, Point, Rect, Zone, ZoneClassifier, ZoneClassifierError, approx_eq};
pub use config::{ConfigError, LayoutConfig};
pub use drop::{DropIntent, DropOutcome};
pub use error::SashError;
pub use invariant::InvariantViolation;
pub use muntin::Muntin;
pub use position::{Dimension, Position, SplitAxis};
pub use sash::{Sash, SashKey};
pub use store::{Content, Store, StoreValue};
pub use strategy::{ChildExtent, Classic, Distribute, Natural, ResizeStrategy};
pub use tree::{SashTree, SplitOptions, SplitOutcome, SplitSize};
