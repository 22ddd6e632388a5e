#![forbid(unsafe_code)]

//! Structural and geometric invariant checks.
//!
//! Every public mutator leaves the tree in a state where
//! [`SashTree::invariant_report`] is empty. The checks are linear in the
//! number of sashes and meant for tests, fuzzing and debug assertions in
//! hosts.

use bwin_core::approx_eq;
use rustc_hash::FxHashSet;

use crate::position::{Dimension, Position};
use crate::sash::SashKey;
use crate::tree::SashTree;

/// One broken invariant, naming the sash where it was found.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root {id} has a parent")]
    RootHasParent { id: String },
    #[error("root {id} has position {position}, expected root")]
    RootPosition { id: String, position: Position },
    #[error("non-root sash {id} has the root position")]
    NonRootAtRootPosition { id: String },
    #[error("sash {id} is a child of {container} but points at another parent")]
    ParentLinkMismatch { id: String, container: String },
    #[error("container {id} has children at {leading} and {trailing}")]
    MixedChildren {
        id: String,
        leading: Position,
        trailing: Position,
    },
    #[error("children of {id} sum to {sum} along {dimension:?}, container is {size}")]
    SizeSumMismatch {
        id: String,
        dimension: Dimension,
        sum: f64,
        size: f64,
    },
    #[error("child {child} of {id} has {dimension:?} {child_size}, container is {size}")]
    CrossSizeMismatch {
        id: String,
        child: String,
        dimension: Dimension,
        child_size: f64,
        size: f64,
    },
    #[error("sash {id} starts at {actual} along {dimension:?}, expected {expected}")]
    OffsetMismatch {
        id: String,
        dimension: Dimension,
        expected: f64,
        actual: f64,
    },
    #[error("sash {id} has {dimension:?} {size}, below its minimum {min}")]
    BelowMinimum {
        id: String,
        dimension: Dimension,
        size: f64,
        min: f64,
    },
    #[error("duplicate sash id {id}")]
    DuplicateId { id: String },
    #[error("sash {id} is not reachable from the root")]
    UnreachableSash { id: String },
}

impl SashTree {
    /// First broken invariant, if any.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        match self.invariant_report().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Every broken invariant, in a deterministic order: the root first,
    /// then containers in pre-order, then arena-wide checks.
    #[must_use]
    pub fn invariant_report(&self) -> Vec<InvariantViolation> {
        let mut issues = Vec::new();
        let root = &self.sashes[self.root];
        if root.parent.is_some() {
            issues.push(InvariantViolation::RootHasParent {
                id: root.id.clone(),
            });
        }
        if root.position != Position::Root {
            issues.push(InvariantViolation::RootPosition {
                id: root.id.clone(),
                position: root.position,
            });
        }

        let mut reachable = FxHashSet::default();
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            if !reachable.insert(key) {
                continue;
            }
            self.check_sash(key, &mut issues);
            if let Some([leading, trailing]) = self.sashes[key].children {
                self.check_children(key, leading, trailing, &mut issues);
                stack.push(trailing);
                stack.push(leading);
            }
        }

        let mut seen = FxHashSet::default();
        for (key, sash) in &self.sashes {
            if !seen.insert(sash.id.as_str()) {
                issues.push(InvariantViolation::DuplicateId { id: sash.id.clone() });
            }
            if !reachable.contains(&key) {
                issues.push(InvariantViolation::UnreachableSash { id: sash.id.clone() });
            }
        }
        issues
    }

    fn check_sash(&self, key: SashKey, issues: &mut Vec<InvariantViolation>) {
        let sash = &self.sashes[key];
        if key != self.root && sash.position == Position::Root {
            issues.push(InvariantViolation::NonRootAtRootPosition {
                id: sash.id.clone(),
            });
        }
        for dimension in [Dimension::Width, Dimension::Height] {
            let size = dimension.size(&sash.rect);
            let min = sash.own_min(dimension);
            if size < min && !approx_eq(size, min) {
                issues.push(InvariantViolation::BelowMinimum {
                    id: sash.id.clone(),
                    dimension,
                    size,
                    min,
                });
            }
        }
    }

    fn check_children(
        &self,
        key: SashKey,
        leading: SashKey,
        trailing: SashKey,
        issues: &mut Vec<InvariantViolation>,
    ) {
        let container = &self.sashes[key];
        let first = &self.sashes[leading];
        let second = &self.sashes[trailing];
        for child in [first, second] {
            if child.parent != Some(key) {
                issues.push(InvariantViolation::ParentLinkMismatch {
                    id: child.id.clone(),
                    container: container.id.clone(),
                });
            }
        }

        let axis = match first.position.axis() {
            Some(axis)
                if first.position.is_leading()
                    && second.position == first.position.opposite() =>
            {
                axis
            }
            _ => {
                issues.push(InvariantViolation::MixedChildren {
                    id: container.id.clone(),
                    leading: first.position,
                    trailing: second.position,
                });
                return;
            }
        };

        let along = axis.dimension();
        let size = along.size(&container.rect);
        let sum = along.size(&first.rect) + along.size(&second.rect);
        if !approx_eq(sum, size) {
            issues.push(InvariantViolation::SizeSumMismatch {
                id: container.id.clone(),
                dimension: along,
                sum,
                size,
            });
        }
        let offset = along.offset(&container.rect);
        for (child, expected) in [
            (first, offset),
            (second, offset + along.size(&first.rect)),
        ] {
            let actual = along.offset(&child.rect);
            if !approx_eq(actual, expected) {
                issues.push(InvariantViolation::OffsetMismatch {
                    id: child.id.clone(),
                    dimension: along,
                    expected,
                    actual,
                });
            }
        }

        let across = match along {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        };
        let size = across.size(&container.rect);
        let offset = across.offset(&container.rect);
        for child in [first, second] {
            let child_size = across.size(&child.rect);
            if !approx_eq(child_size, size) {
                issues.push(InvariantViolation::CrossSizeMismatch {
                    id: container.id.clone(),
                    child: child.id.clone(),
                    dimension: across,
                    child_size,
                    size,
                });
            }
            let actual = across.offset(&child.rect);
            if !approx_eq(actual, offset) {
                issues.push(InvariantViolation::OffsetMismatch {
                    id: child.id.clone(),
                    dimension: across,
                    expected: offset,
                    actual,
                });
            }
        }
    }
}
