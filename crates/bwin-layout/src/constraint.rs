#![forbid(unsafe_code)]

//! Minimum admissible size of a subtree.
//!
//! Along a container's split axis the children's minimums add up; across it
//! the larger one wins. A sash's own floor applies on top of both. Results
//! are recomputed on every call: children change independently and a stale
//! value would let a resize cut below a floor.

use crate::error::SashError;
use crate::position::Dimension;
use crate::sash::SashKey;
use crate::tree::SashTree;

impl SashTree {
    /// Smallest width the sash `id` and its subtree can take.
    pub fn min_width_of(&self, id: &str) -> Result<f64, SashError> {
        self.min_size_of(id, Dimension::Width)
    }

    /// Smallest height the sash `id` and its subtree can take.
    pub fn min_height_of(&self, id: &str) -> Result<f64, SashError> {
        self.min_size_of(id, Dimension::Height)
    }

    pub fn min_size_of(&self, id: &str, dimension: Dimension) -> Result<f64, SashError> {
        Ok(self.calc_min(self.resolve(id)?, dimension))
    }

    /// O(subtree) recursive minimum.
    pub(crate) fn calc_min(&self, key: SashKey, dimension: Dimension) -> f64 {
        let sash = &self.sashes[key];
        let own = sash.own_min(dimension);
        let Some([leading, trailing]) = sash.children else {
            return own;
        };
        let leading_min = self.calc_min(leading, dimension);
        let trailing_min = self.calc_min(trailing, dimension);
        let combined = if self.axis_of(key) == Some(dimension.axis()) {
            leading_min + trailing_min
        } else {
            leading_min.max(trailing_min)
        };
        own.max(combined)
    }
}

#[cfg(test)]
mod tests {
    use bwin_core::Rect;

    use crate::{LayoutConfig, Position, SashTree, SplitOptions, SplitSize};

    fn tree(min: f64) -> SashTree {
        let config = LayoutConfig {
            min_width: min,
            min_height: min,
            ..LayoutConfig::default()
        };
        SashTree::with_root(config, "root", Rect::from_size(800.0, 600.0), Default::default())
            .expect("valid root")
    }

    #[test]
    fn leaf_min_is_own_floor() {
        let tree = tree(100.0);
        assert_eq!(tree.min_width_of("root"), Ok(100.0));
        assert_eq!(tree.min_height_of("root"), Ok(100.0));
    }

    #[test]
    fn split_axis_sums_cross_axis_takes_max() {
        let mut tree = tree(100.0);
        let _ = tree
            .split_with(
                "root",
                SplitOptions::new(Position::Right, SplitSize::Ratio(0.5)).with_id("right"),
            )
            .expect("split root");
        let _ = tree
            .split_with(
                "right",
                SplitOptions::new(Position::Right, SplitSize::Ratio(0.5)).with_id("far-right"),
            )
            .expect("split right");
        let _ = tree
            .split_with(
                "far-right",
                SplitOptions::new(Position::Bottom, SplitSize::Ratio(0.5)).with_id("corner"),
            )
            .expect("split far right");

        // root: left(100) + right[100 + far-right]; far-right stacks vertically.
        assert_eq!(tree.min_width_of("root"), Ok(300.0));
        assert_eq!(tree.min_height_of("root"), Ok(200.0));
        assert_eq!(tree.min_width_of("far-right"), Ok(100.0));
        assert_eq!(tree.min_height_of("far-right"), Ok(200.0));
    }

    #[test]
    fn unknown_id_is_reported() {
        let tree = tree(50.0);
        assert!(tree.min_width_of("nope").is_err());
    }
}
