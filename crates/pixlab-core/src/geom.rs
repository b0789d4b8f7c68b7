//! Integer lattice geometry consumed and produced by the rasterizers.

use std::fmt;

/// A lattice cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate (y grows upwards in world space)
    pub y: i32,
}

impl Point2D {
    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2D {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line between two lattice points, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// First endpoint
    pub start: Point2D,
    /// Second endpoint
    pub end: Point2D,
}

impl LineSegment {
    /// Creates a segment from raw endpoint coordinates.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    /// Signed extent along each axis, widened so it cannot overflow.
    #[inline]
    pub fn delta(&self) -> (i64, i64) {
        (
            self.end.x as i64 - self.start.x as i64,
            self.end.y as i64 - self.start.y as i64,
        )
    }
}

/// A circle outline centered on a lattice point.
///
/// The radius is unsigned: a negative radius is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center cell
    pub center: Point2D,
    /// Radius in cells
    pub radius: u32,
}

impl Circle {
    /// Creates a circle.
    #[inline]
    pub const fn new(cx: i32, cy: i32, radius: u32) -> Self {
        Self {
            center: Point2D::new(cx, cy),
            radius,
        }
    }
}
