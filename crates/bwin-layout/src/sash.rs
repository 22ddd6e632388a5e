#![forbid(unsafe_code)]

//! The sash: one node of the binary space-partitioning tree.
//!
//! A sash is either a leaf (a pane) or a container with exactly two
//! children laid out along one [`SplitAxis`](crate::SplitAxis). Sashes live in the tree's
//! arena and refer to each other through [`SashKey`]s; the parent link is a
//! plain key used for traversal only.

use bwin_core::Rect;
use slotmap::new_key_type;

use crate::position::{Dimension, Position};
use crate::store::Store;
use crate::strategy::ResizeStrategy;

new_key_type! {
    /// Arena handle of a sash. Stable until the sash is removed.
    pub struct SashKey;
}

/// One node of a [`SashTree`](crate::SashTree).
#[derive(Debug, Clone, PartialEq)]
pub struct Sash {
    pub(crate) id: String,
    pub(crate) position: Position,
    pub(crate) rect: Rect,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) strategy: ResizeStrategy,
    pub(crate) parent: Option<SashKey>,
    /// `[leading, trailing]`: left/top first.
    pub(crate) children: Option<[SashKey; 2]>,
    pub(crate) store: Store,
}

/// Per-sash settings a split hands down to both new children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Inherited {
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) strategy: ResizeStrategy,
}

impl Sash {
    pub(crate) fn leaf(
        id: String,
        position: Position,
        rect: Rect,
        inherited: Inherited,
        parent: Option<SashKey>,
        store: Store,
    ) -> Self {
        Self {
            id,
            position,
            rect,
            min_width: inherited.min_width,
            min_height: inherited.min_height,
            strategy: inherited.strategy,
            parent,
            children: None,
            store,
        }
    }

    pub(crate) const fn inherited(&self) -> Inherited {
        Inherited {
            min_width: self.min_width,
            min_height: self.min_height,
            strategy: self.strategy,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.rect.left
    }

    #[must_use]
    pub const fn top(&self) -> f64 {
        self.rect.top
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.rect.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.rect.height
    }

    /// Own floor for width, ignoring descendants.
    #[must_use]
    pub const fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Own floor for height, ignoring descendants.
    #[must_use]
    pub const fn min_height(&self) -> f64 {
        self.min_height
    }

    #[must_use]
    pub const fn own_min(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    #[must_use]
    pub const fn resize_strategy(&self) -> ResizeStrategy {
        self.strategy
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub const fn parent_key(&self) -> Option<SashKey> {
        self.parent
    }

    #[must_use]
    pub const fn child_keys(&self) -> Option<[SashKey; 2]> {
        self.children
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}
