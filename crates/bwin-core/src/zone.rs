#![forbid(unsafe_code)]

//! Pointer-to-zone classification for drag-and-drop targeting.
//!
//! A target rectangle is cut by both of its diagonals into four triangular
//! wedges (top, right, bottom, left). A centered inner rectangle, inset by a
//! configurable fraction of the outer size on each side, is tested first and
//! wins over the wedges.
//!
//! ```text
//!  +-------------------+
//!  |\       top       /|
//!  |  \ +---------+ /  |
//!  |left| center  |right
//!  |  / +---------+ \  |
//!  |/      bottom     \|
//!  +-------------------+
//! ```
//!
//! Classification is pure and allocation free; the drop layer calls it once
//! per hover frame.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Default center inset: 20% of the target size on every side.
pub const DEFAULT_CENTER_INSET: f64 = 0.2;

/// Drop zone relative to a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

impl Zone {
    /// All zones in clockwise order, center last.
    pub const ALL: [Zone; 5] = [
        Zone::Top,
        Zone::Right,
        Zone::Bottom,
        Zone::Left,
        Zone::Center,
    ];

    /// Edge zones request a split; the center zone requests a swap.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !matches!(self, Zone::Center)
    }
}

/// Errors raised when building a [`ZoneClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ZoneClassifierError {
    #[error("center inset {inset} must be within [0, 0.5]")]
    InvalidInset { inset: f64 },
}

/// Maps a pointer position over a rectangle to a [`Zone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneClassifier {
    center_inset: f64,
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        Self {
            center_inset: DEFAULT_CENTER_INSET,
        }
    }
}

impl ZoneClassifier {
    /// Create a classifier whose center zone is inset by `center_inset` of
    /// the target size on each side.
    ///
    /// `0.0` makes the whole rectangle the center zone; `0.5` removes the
    /// center zone and leaves only the four wedges.
    pub fn new(center_inset: f64) -> Result<Self, ZoneClassifierError> {
        if !(0.0..=0.5).contains(&center_inset) {
            return Err(ZoneClassifierError::InvalidInset {
                inset: center_inset,
            });
        }
        Ok(Self { center_inset })
    }

    /// Center inset fraction.
    #[must_use]
    pub const fn center_inset(&self) -> f64 {
        self.center_inset
    }

    /// The inner rectangle that classifies as [`Zone::Center`].
    #[must_use]
    pub fn center_rect(&self, rect: Rect) -> Rect {
        rect.inset_fraction(self.center_inset)
    }

    /// Classify `pointer` against `rect`.
    ///
    /// Points outside the rectangle are classified by the extended diagonals,
    /// so the result is always defined. Points exactly on a diagonal resolve
    /// toward the top/bottom wedge; the exact crossing point and any point
    /// over an empty rectangle classify as center.
    #[must_use]
    pub fn classify(&self, rect: Rect, pointer: Point) -> Zone {
        if rect.is_empty() {
            return Zone::Center;
        }
        let inner = self.center_rect(rect);
        if !inner.is_empty() && inner.contains(pointer) {
            return Zone::Center;
        }

        // Main diagonal runs top-left -> bottom-right, anti diagonal runs
        // top-right -> bottom-left. Negative `main` means the pointer lies on
        // the top-right side of the main diagonal; positive `anti` means it
        // lies on the top-left side of the anti diagonal.
        let dy = pointer.y - rect.top;
        let main = rect.width * dy - rect.height * (pointer.x - rect.left);
        let anti = -rect.width * dy - rect.height * (pointer.x - rect.right());

        if main == 0.0 && anti == 0.0 {
            return Zone::Center;
        }
        if main <= 0.0 && anti >= 0.0 {
            Zone::Top
        } else if main >= 0.0 && anti <= 0.0 {
            Zone::Bottom
        } else if main < 0.0 {
            Zone::Right
        } else {
            Zone::Left
        }
    }

    /// Classify only when the pointer is inside `rect`.
    #[must_use]
    pub fn classify_within(&self, rect: Rect, pointer: Point) -> Option<Zone> {
        rect.contains(pointer)
            .then(|| self.classify(rect, pointer))
    }
}
