#![forbid(unsafe_code)]

//! Geometry propagation.
//!
//! Every dimension change runs to completion before returning: the target
//! sash is updated, then its children, depth first, so that a container's
//! size always equals the combination of its children's.
//!
//! Sizes distribute through the container's [`ResizeStrategy`]; offsets shift
//! rigidly. Requests below a subtree's minimum clamp instead of failing.
//!
//! On the root the setters behave exactly like that. On any other sash the
//! request is routed to the edge the sash actually owns:
//!
//! - size along the parent's split axis moves the divider against the
//!   sibling;
//! - size across the parent's split axis is the parent's size, so the
//!   request goes to the parent;
//! - the offset of a trailing child is the divider position; any other
//!   offset is the parent's.
//!
//! [`ResizeStrategy`]: crate::ResizeStrategy

use bwin_core::Rect;

use crate::error::{SashError, check_offset, check_size};
use crate::position::Dimension;
use crate::sash::SashKey;
use crate::strategy::{ChildExtent, Distribute};
use crate::tree::SashTree;

impl SashTree {
    /// Set the width of `id`, returning the width it ended up with.
    pub fn set_width(&mut self, id: &str, width: f64) -> Result<f64, SashError> {
        self.set_size(id, Dimension::Width, width)
    }

    /// Set the height of `id`, returning the height it ended up with.
    pub fn set_height(&mut self, id: &str, height: f64) -> Result<f64, SashError> {
        self.set_size(id, Dimension::Height, height)
    }

    /// Set the left edge of `id`, returning where it ended up.
    pub fn set_left(&mut self, id: &str, left: f64) -> Result<f64, SashError> {
        self.set_offset(id, Dimension::Width, left)
    }

    /// Set the top edge of `id`, returning where it ended up.
    pub fn set_top(&mut self, id: &str, top: f64) -> Result<f64, SashError> {
        self.set_offset(id, Dimension::Height, top)
    }

    pub fn set_size(&mut self, id: &str, dimension: Dimension, size: f64) -> Result<f64, SashError> {
        let size = check_size(dimension.size_field(), size)?;
        let key = self.resolve(id)?;
        self.resize_sash(key, dimension, size);
        Ok(dimension.size(&self.sashes[key].rect))
    }

    pub fn set_offset(
        &mut self,
        id: &str,
        dimension: Dimension,
        offset: f64,
    ) -> Result<f64, SashError> {
        let offset = check_offset(dimension.offset_field(), offset)?;
        let key = self.resolve(id)?;
        self.move_edge(key, dimension, offset);
        Ok(dimension.offset(&self.sashes[key].rect))
    }

    /// Resize the root to `width` x `height`, returning its final rectangle.
    pub fn fit(&mut self, width: f64, height: f64) -> Result<Rect, SashError> {
        let width = check_size("width", width)?;
        let height = check_size("height", height)?;
        self.resize_sash(self.root, Dimension::Width, width);
        self.resize_sash(self.root, Dimension::Height, height);
        Ok(self.sashes[self.root].rect)
    }

    /// Route a size request to whichever sash owns that extent.
    pub(crate) fn resize_sash(&mut self, key: SashKey, dimension: Dimension, requested: f64) {
        let Some(parent) = self.sashes[key].parent else {
            let min = self.calc_min(key, dimension);
            let size = requested.max(min);
            if size > requested {
                tracing::trace!(
                    sash = %self.sashes[key].id,
                    dimension = dimension.size_field(),
                    requested,
                    min,
                    "resize clamped to subtree minimum"
                );
            }
            self.apply_size(key, dimension, size);
            return;
        };

        if self.axis_of(parent) != Some(dimension.axis()) {
            self.resize_sash(parent, dimension, requested);
            return;
        }
        let Some([leading, _]) = self.sashes[parent].children else {
            return;
        };
        let leading_size = if leading == key {
            requested
        } else {
            dimension.size(&self.sashes[parent].rect) - requested
        };
        let _ = self.resize_pair(parent, dimension, leading_size);
    }

    /// Route an offset request to whichever sash owns that edge.
    fn move_edge(&mut self, key: SashKey, dimension: Dimension, offset: f64) {
        let Some(parent) = self.sashes[key].parent else {
            self.move_to(key, dimension, offset);
            return;
        };
        match self.sashes[parent].children {
            Some([_, trailing])
                if trailing == key && self.axis_of(parent) == Some(dimension.axis()) =>
            {
                let leading_size = offset - dimension.offset(&self.sashes[parent].rect);
                let _ = self.resize_pair(parent, dimension, leading_size);
            }
            _ => self.move_edge(parent, dimension, offset),
        }
    }

    /// Move the divider of `container` so its leading child gets
    /// `leading_size`, clamped so both children keep their minimum. Returns
    /// the leading size applied.
    pub(crate) fn resize_pair(
        &mut self,
        container: SashKey,
        dimension: Dimension,
        leading_size: f64,
    ) -> f64 {
        let sash = &self.sashes[container];
        let Some([leading, trailing]) = sash.children else {
            return dimension.size(&sash.rect);
        };
        let total = dimension.size(&sash.rect);
        let offset = dimension.offset(&sash.rect);

        let upper = total - self.calc_min(trailing, dimension);
        let lower = self.calc_min(leading, dimension);
        let applied = leading_size.min(upper).max(lower);
        if applied != leading_size {
            tracing::trace!(
                sash = %self.sashes[container].id,
                dimension = dimension.size_field(),
                requested = leading_size,
                applied,
                "divider move clamped"
            );
        }

        self.apply_size(leading, dimension, applied);
        self.apply_size(trailing, dimension, total - applied);
        self.move_to(trailing, dimension, offset + applied);
        applied
    }

    /// Set the size of `key` and cascade into its subtree. The caller has
    /// already clamped `size` to the subtree minimum.
    pub(crate) fn apply_size(&mut self, key: SashKey, dimension: Dimension, size: f64) {
        let (children, strategy, offset) = {
            let sash = &mut self.sashes[key];
            *dimension.size_mut(&mut sash.rect) = size;
            (sash.children, sash.strategy, dimension.offset(&sash.rect))
        };
        let Some([leading, trailing]) = children else {
            return;
        };

        if self.axis_of(key) == Some(dimension.axis()) {
            let leading_extent = ChildExtent::new(
                dimension.size(&self.sashes[leading].rect),
                self.calc_min(leading, dimension),
            );
            let trailing_extent = ChildExtent::new(
                dimension.size(&self.sashes[trailing].rect),
                self.calc_min(trailing, dimension),
            );
            let delta = size - (leading_extent.size + trailing_extent.size);
            let (leading_size, trailing_size) =
                strategy.distribute(leading_extent, trailing_extent, delta);
            self.apply_size(leading, dimension, leading_size);
            self.apply_size(trailing, dimension, trailing_size);
            self.move_to(trailing, dimension, offset + leading_size);
        } else {
            self.apply_size(leading, dimension, size);
            self.apply_size(trailing, dimension, size);
        }
    }

    /// Place `key`'s leading edge at `offset`, shifting its subtree rigidly.
    pub(crate) fn move_to(&mut self, key: SashKey, dimension: Dimension, offset: f64) {
        let distance = offset - dimension.offset(&self.sashes[key].rect);
        self.shift(key, dimension, distance);
    }

    fn shift(&mut self, key: SashKey, dimension: Dimension, distance: f64) {
        if distance == 0.0 {
            return;
        }
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            let sash = &mut self.sashes[key];
            *dimension.offset_mut(&mut sash.rect) += distance;
            if let Some(children) = sash.children {
                stack.extend(children);
            }
        }
    }

    /// Give `key` exactly `rect`, cascading into its subtree.
    pub(crate) fn fill_rect(&mut self, key: SashKey, rect: Rect) {
        self.move_to(key, Dimension::Width, rect.left);
        self.move_to(key, Dimension::Height, rect.top);
        self.apply_size(key, Dimension::Width, rect.width);
        self.apply_size(key, Dimension::Height, rect.height);
    }
}

#[cfg(test)]
mod tests {
    use bwin_core::Rect;

    use crate::{LayoutConfig, Position, ResizeStrategy, SashTree, SplitOptions, SplitSize};

    fn tree_with(strategy: ResizeStrategy) -> SashTree {
        let config = LayoutConfig {
            min_width: 100.0,
            min_height: 100.0,
            resize_strategy: strategy,
            ..LayoutConfig::default()
        };
        SashTree::with_root(config, "root", Rect::from_size(800.0, 600.0), Default::default())
            .expect("valid root")
    }

    fn split(tree: &mut SashTree, target: &str, position: Position, id: &str) {
        let _ = tree
            .split_with(
                target,
                SplitOptions::new(position, SplitSize::Ratio(0.5)).with_id(id),
            )
            .expect("split");
    }

    fn rect(tree: &SashTree, id: &str) -> Rect {
        tree.get_by_id(id).expect("sash exists").rect()
    }

    #[test]
    fn classic_root_growth_keeps_proportions() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        assert_eq!(tree.set_width("root", 1000.0), Ok(1000.0));
        assert_eq!(rect(&tree, "b"), Rect::new(500.0, 0.0, 500.0, 600.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn natural_root_growth_goes_to_trailing_child() {
        let mut tree = tree_with(ResizeStrategy::Natural);
        split(&mut tree, "root", Position::Right, "b");
        let _ = tree.set_width("root", 1000.0).expect("resize");
        assert_eq!(rect(&tree, "b"), Rect::new(400.0, 0.0, 600.0, 600.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn cross_axis_size_is_mirrored() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Bottom, "b");
        let _ = tree.set_width("root", 300.0).expect("resize");
        assert_eq!(rect(&tree, "b").width, 300.0);
        let (top, _) = tree.children_of(tree.root()).expect("container");
        assert_eq!(top.width(), 300.0);
    }

    #[test]
    fn root_shrink_clamps_at_combined_minimum() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        assert_eq!(tree.set_width("root", 150.0), Ok(200.0));
        assert_eq!(rect(&tree, "b").width, 100.0);
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn child_width_moves_divider_against_sibling() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        assert_eq!(tree.set_width("b", 600.0), Ok(600.0));
        assert_eq!(rect(&tree, "b"), Rect::new(200.0, 0.0, 600.0, 600.0));
        assert_eq!(tree.root().width(), 800.0);
        // The sibling keeps its floor.
        assert_eq!(tree.set_width("b", 790.0), Ok(700.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn child_cross_axis_width_resizes_parent() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Bottom, "b");
        assert_eq!(tree.set_width("b", 500.0), Ok(500.0));
        assert_eq!(tree.root().width(), 500.0);
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn root_offset_shifts_whole_tree() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        assert_eq!(tree.set_left("root", 40.0), Ok(40.0));
        assert_eq!(tree.set_top("root", -10.0), Ok(-10.0));
        assert_eq!(rect(&tree, "b"), Rect::new(440.0, -10.0, 400.0, 600.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn trailing_child_offset_is_the_divider() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        assert_eq!(tree.set_left("b", 300.0), Ok(300.0));
        assert_eq!(rect(&tree, "b"), Rect::new(300.0, 0.0, 500.0, 600.0));
        // Past the leading child's floor the divider stops.
        assert_eq!(tree.set_left("b", 20.0), Ok(100.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn nested_cascade_uses_each_containers_strategy() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Right, "b");
        split(&mut tree, "b", Position::Right, "c");
        tree.set_resize_strategy("b", ResizeStrategy::Natural)
            .expect("set strategy");
        let _ = tree.set_width("root", 1200.0).expect("resize");
        // Root grows 50/50 (+200 each); inside `b` the trailing pane takes it all.
        assert_eq!(rect(&tree, "b"), Rect::new(600.0, 0.0, 600.0, 600.0));
        assert_eq!(rect(&tree, "c"), Rect::new(800.0, 0.0, 400.0, 600.0));
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn fit_resizes_both_axes() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        split(&mut tree, "root", Position::Bottom, "b");
        let rect = tree.fit(1024.0, 768.0).expect("fit");
        assert_eq!(rect, Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(tree.get_by_id("b").expect("b").height(), 384.0);
        tree.check_invariants().expect("invariants hold");
    }

    #[test]
    fn invalid_values_are_rejected_untouched() {
        let mut tree = tree_with(ResizeStrategy::Classic);
        assert!(tree.set_width("root", 0.0).is_err());
        assert!(tree.set_height("root", f64::NAN).is_err());
        assert!(tree.set_left("root", f64::INFINITY).is_err());
        assert!(tree.set_width("missing", 10.0).is_err());
        assert_eq!(tree.root().rect(), Rect::from_size(800.0, 600.0));
    }
}
