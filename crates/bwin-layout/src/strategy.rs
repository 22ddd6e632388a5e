#![forbid(unsafe_code)]

//! Resize strategies: how a container splits a size change between its two
//! children.
//!
//! Strategies are pure. The caller supplies each child's current size and
//! its subtree minimum; the strategy returns the new sizes, which always sum
//! to the container's new size and never go below either minimum as long as
//! the new size itself covers both minimums. Containers are clamped to their
//! subtree minimum before distribution, so that precondition holds inside
//! the tree.

use serde::{Deserialize, Serialize};

/// Current extent of one child along the distributed dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildExtent {
    /// Current size.
    pub size: f64,
    /// Subtree minimum (see [`SashTree::min_size_of`](crate::SashTree::min_size_of)).
    pub min: f64,
}

impl ChildExtent {
    #[must_use]
    pub const fn new(size: f64, min: f64) -> Self {
        Self { size, min }
    }
}

/// Shared contract of every resize strategy.
pub trait Distribute {
    /// Split `delta` between `leading` (left/top) and `trailing`
    /// (right/bottom), returning their new sizes.
    fn distribute(&self, leading: ChildExtent, trailing: ChildExtent, delta: f64) -> (f64, f64);
}

/// Proportional distribution: each child takes its current share of `delta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classic;

/// Trailing child absorbs `delta`; the leading child only moves once the
/// trailing child reaches its floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl Distribute for Classic {
    fn distribute(&self, leading: ChildExtent, trailing: ChildExtent, delta: f64) -> (f64, f64) {
        let current = leading.size + trailing.size;
        let total = current + delta;
        let proposed = if current > 0.0 {
            leading.size + delta * (leading.size / current)
        } else {
            total / 2.0
        };
        clamp_pair(leading, trailing, total, proposed)
    }
}

impl Distribute for Natural {
    fn distribute(&self, leading: ChildExtent, trailing: ChildExtent, delta: f64) -> (f64, f64) {
        let total = leading.size + trailing.size + delta;
        clamp_pair(leading, trailing, total, leading.size)
    }
}

/// Fit a proposed leading size into `[leading.min, total - trailing.min]`,
/// handing whatever is clamped away to the sibling.
fn clamp_pair(leading: ChildExtent, trailing: ChildExtent, total: f64, proposed: f64) -> (f64, f64) {
    let floor = leading.min + trailing.min;
    if total < floor {
        // Unreachable inside a clamped tree; keep the sum and split the
        // shortfall in proportion to the floors.
        let lead = if floor > 0.0 {
            total * (leading.min / floor)
        } else {
            total / 2.0
        };
        return (lead, total - lead);
    }
    let lead = proposed.min(total - trailing.min).max(leading.min);
    (lead, total - lead)
}

/// Per-container strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeStrategy {
    /// See [`Classic`].
    #[default]
    Classic,
    /// See [`Natural`].
    Natural,
}

impl Distribute for ResizeStrategy {
    fn distribute(&self, leading: ChildExtent, trailing: ChildExtent, delta: f64) -> (f64, f64) {
        match self {
            Self::Classic => Classic.distribute(leading, trailing, delta),
            Self::Natural => Natural.distribute(leading, trailing, delta),
        }
    }
}
