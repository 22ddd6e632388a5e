#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing accumulated floating-point geometry.
pub const EPSILON: f64 = 1e-6;

/// Compare two lengths with a tolerance scaled to their magnitude.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON * scale
}

/// A point in layout coordinates (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle in layout units (pixels or any consistent unit).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: f64,
    /// Top edge (inclusive).
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// All four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Check if a point is inside the rectangle (right/bottom edges exclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// Shrink the rectangle by `fraction` of its own size on every side.
    ///
    /// `fraction` is clamped to `[0, 0.5]`; at `0.5` the result collapses to
    /// the center point.
    pub fn inset_fraction(&self, fraction: f64) -> Rect {
        let fraction = fraction.clamp(0.0, 0.5);
        let dx = self.width * fraction;
        let dy = self.height * fraction;
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Compare component-wise within [`EPSILON`].
    pub fn approx_eq(&self, other: &Rect) -> bool {
        approx_eq(self.left, other.left)
            && approx_eq(self.top, other.top)
            && approx_eq(self.width, other.width)
            && approx_eq(self.height, other.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(109.9, 69.9)));
        assert!(!r.contains(Point::new(110.0, 20.0)));
        assert!(!r.contains(Point::new(10.0, 70.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.area(), 5_000.0);
    }

    #[test]
    fn inset_fraction_shrinks_proportionally() {
        let r = Rect::from_size(100.0, 200.0);
        let inner = r.inset_fraction(0.2);
        assert!(inner.approx_eq(&Rect::new(20.0, 40.0, 60.0, 120.0)));
    }

    #[test]
    fn inset_fraction_is_clamped() {
        let r = Rect::from_size(100.0, 100.0);
        assert_eq!(r.inset_fraction(-1.0), r);
        let collapsed = r.inset_fraction(0.9);
        assert!(collapsed.is_empty());
        assert!(approx_eq(collapsed.left, 50.0));
    }

    #[test]
    fn approx_eq_scales_with_magnitude() {
        assert!(approx_eq(1_000_000.0, 1_000_000.000_5));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(0.0, 1e-9));
    }

    #[test]
    fn empty_and_finite_checks() {
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
