#![forbid(unsafe_code)]

//! Dividers between the two children of a container.
//!
//! A muntin is the line where a container's children meet. The tree reports
//! it as a zero-thickness rectangle; renderers pick their own thickness with
//! [`Muntin::rect_with_thickness`].

use bwin_core::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{SashError, check_offset};
use crate::position::SplitAxis;
use crate::sash::SashKey;
use crate::tree::SashTree;

/// Divider geometry of one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Muntin {
    /// Id of the container this divider belongs to.
    pub container: String,
    pub axis: SplitAxis,
    /// Zero-width (horizontal split) or zero-height (vertical split) line.
    pub line: Rect,
}

impl Muntin {
    /// Band of `thickness` centered on the divider line.
    #[must_use]
    pub fn rect_with_thickness(&self, thickness: f64) -> Rect {
        let half = thickness / 2.0;
        match self.axis {
            SplitAxis::Horizontal => Rect::new(
                self.line.left - half,
                self.line.top,
                thickness,
                self.line.height,
            ),
            SplitAxis::Vertical => Rect::new(
                self.line.left,
                self.line.top - half,
                self.line.width,
                thickness,
            ),
        }
    }
}

impl SashTree {
    /// Divider of the container `id`.
    pub fn muntin(&self, id: &str) -> Result<Muntin, SashError> {
        let key = self.resolve(id)?;
        self.muntin_of(key)
            .ok_or_else(|| SashError::SashNotContainer { id: id.to_string() })
    }

    /// Dividers of every container, outermost first.
    #[must_use]
    pub fn muntins(&self) -> Vec<Muntin> {
        let mut muntins = Vec::new();
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            if let Some([leading, trailing]) = self.sashes[key].children {
                muntins.extend(self.muntin_of(key));
                stack.push(trailing);
                stack.push(leading);
            }
        }
        muntins
    }

    /// Move the divider of container `id` by `delta` along its axis.
    ///
    /// Both sides keep their minimum; the delta actually applied is
    /// returned.
    pub fn move_muntin(&mut self, id: &str, delta: f64) -> Result<f64, SashError> {
        let delta = check_offset("delta", delta)?;
        let key = self.resolve(id)?;
        let (Some(axis), Some([leading, _])) = (self.axis_of(key), self.sashes[key].children)
        else {
            return Err(SashError::SashNotContainer { id: id.to_string() });
        };
        let dimension = axis.dimension();
        let before = dimension.size(&self.sashes[leading].rect);
        let after = self.resize_pair(key, dimension, before + delta);
        tracing::debug!(sash = id, requested = delta, applied = after - before, "muntin moved");
        Ok(after - before)
    }

    fn muntin_of(&self, key: SashKey) -> Option<Muntin> {
        let sash = &self.sashes[key];
        let [leading, _] = sash.children?;
        let axis = self.axis_of(key)?;
        let leading = &self.sashes[leading].rect;
        let line = match axis {
            SplitAxis::Horizontal => {
                Rect::new(leading.right(), sash.rect.top, 0.0, sash.rect.height)
            }
            SplitAxis::Vertical => {
                Rect::new(sash.rect.left, leading.bottom(), sash.rect.width, 0.0)
            }
        };
        Some(Muntin {
            container: sash.id.clone(),
            axis,
            line,
        })
    }
}
