#![forbid(unsafe_code)]

//! Sash positions, split axes and the dimension they govern.

use std::fmt;
use std::str::FromStr;

use bwin_core::{Rect, Zone};
use serde::{Deserialize, Serialize};

use crate::error::SashError;

/// Role of a sash relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Root,
    Left,
    Right,
    Top,
    Bottom,
}

impl Position {
    /// The position on the other side of the same split.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Root => Self::Root,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Split axis this position belongs to, `None` for the root.
    #[must_use]
    pub const fn axis(self) -> Option<SplitAxis> {
        match self {
            Self::Root => None,
            Self::Left | Self::Right => Some(SplitAxis::Horizontal),
            Self::Top | Self::Bottom => Some(SplitAxis::Vertical),
        }
    }

    /// Left and top come first in a container's child order.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }

    /// Edge position for a drop zone; the center zone has none.
    #[must_use]
    pub const fn from_zone(zone: Zone) -> Option<Self> {
        match zone {
            Zone::Top => Some(Self::Top),
            Zone::Right => Some(Self::Right),
            Zone::Bottom => Some(Self::Bottom),
            Zone::Left => Some(Self::Left),
            Zone::Center => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = SashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(Self::Root),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(SashError::InvalidPosition {
                value: value.to_string(),
            }),
        }
    }
}

/// Orientation of a container's split.
///
/// `Horizontal` lays children side by side (left/right) and distributes
/// width; `Vertical` stacks them (top/bottom) and distributes height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

impl SplitAxis {
    /// Child positions in container order.
    #[must_use]
    pub const fn positions(self) -> [Position; 2] {
        match self {
            Self::Horizontal => [Position::Left, Position::Right],
            Self::Vertical => [Position::Top, Position::Bottom],
        }
    }

    /// The dimension that this axis divides between children.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Horizontal => Dimension::Width,
            Self::Vertical => Dimension::Height,
        }
    }
}

/// One of the two size dimensions of a sash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The split axis that distributes this dimension.
    #[must_use]
    pub const fn axis(self) -> SplitAxis {
        match self {
            Self::Width => SplitAxis::Horizontal,
            Self::Height => SplitAxis::Vertical,
        }
    }

    #[must_use]
    pub const fn size_field(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    #[must_use]
    pub const fn offset_field(self) -> &'static str {
        match self {
            Self::Width => "left",
            Self::Height => "top",
        }
    }

    /// Extent of `rect` along this dimension.
    #[inline]
    #[must_use]
    pub fn size(self, rect: &Rect) -> f64 {
        match self {
            Self::Width => rect.width,
            Self::Height => rect.height,
        }
    }

    /// Leading edge of `rect` along this dimension.
    #[inline]
    #[must_use]
    pub fn offset(self, rect: &Rect) -> f64 {
        match self {
            Self::Width => rect.left,
            Self::Height => rect.top,
        }
    }

    #[inline]
    pub(crate) fn size_mut(self, rect: &mut Rect) -> &mut f64 {
        match self {
            Self::Width => &mut rect.width,
            Self::Height => &mut rect.height,
        }
    }

    #[inline]
    pub(crate) fn offset_mut(self, rect: &mut Rect) -> &mut f64 {
        match self {
            Self::Width => &mut rect.left,
            Self::Height => &mut rect.top,
        }
    }
}
