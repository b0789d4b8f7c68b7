//! Algorithm selection.
//!
//! [`RasterAlgorithm`] names one of the four rasterizers and dispatches a
//! [`Shape`] to it. Line algorithms only accept lines and the circle
//! algorithm only accepts circles.

use crate::circle::bresenham_circle;
use crate::line::{bresenham_line, dda, stepwise};
use crate::{RasterError, RasterResult};
use pixlab_core::{Circle, LineSegment, Point2D};
use std::fmt;
use std::str::FromStr;

/// The four rasterizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RasterAlgorithm {
    /// Step-by-step float walk, rounded.
    Step,
    /// Digital differential analyzer.
    Dda,
    /// Bresenham integer line.
    Bresenham,
    /// Bresenham midpoint circle.
    Circle,
}

impl RasterAlgorithm {
    /// All algorithms, lines first.
    pub const ALL: [Self; 4] = [Self::Step, Self::Dda, Self::Bresenham, Self::Circle];

    /// Returns `true` for the three line algorithms.
    pub fn is_line(self) -> bool {
        !matches!(self, Self::Circle)
    }

    /// Runs this algorithm on `shape`.
    ///
    /// # Errors
    ///
    /// [`RasterError::ShapeMismatch`] when a line algorithm is handed a
    /// circle or the reverse.
    pub fn rasterize(self, shape: &Shape) -> RasterResult<Vec<Point2D>> {
        match (self, shape) {
            (Self::Step, Shape::Line(l)) => Ok(stepwise(l.start.x, l.start.y, l.end.x, l.end.y)),
            (Self::Dda, Shape::Line(l)) => Ok(dda(l.start.x, l.start.y, l.end.x, l.end.y)),
            (Self::Bresenham, Shape::Line(l)) => {
                Ok(bresenham_line(l.start.x, l.start.y, l.end.x, l.end.y))
            }
            (Self::Circle, Shape::Circle(c)) => Ok(bresenham_circle(c.center.x, c.center.y, c.radius)),
            (algorithm, shape) => Err(RasterError::ShapeMismatch {
                algorithm: algorithm.to_string(),
                shape: shape.kind(),
            }),
        }
    }
}

impl FromStr for RasterAlgorithm {
    type Err = RasterError;

    fn from_str(s: &str) -> RasterResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "step" | "stepwise" => Ok(Self::Step),
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            "circle" => Ok(Self::Circle),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown algorithm '{}' (expected step, dda, bresenham or circle)",
                other
            ))),
        }
    }
}

impl fmt::Display for RasterAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => f.write_str("step"),
            Self::Dda => f.write_str("dda"),
            Self::Bresenham => f.write_str("bresenham"),
            Self::Circle => f.write_str("circle"),
        }
    }
}

/// Geometry handed to a rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Segment between two endpoints.
    Line(LineSegment),
    /// Circle outline.
    Circle(Circle),
}

impl Shape {
    fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
        }
    }
}

impl From<LineSegment> for Shape {
    fn from(l: LineSegment) -> Self {
        Self::Line(l)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_line() {
        let shape = Shape::from(LineSegment::new(0, 0, 5, 2));
        assert_eq!(RasterAlgorithm::Bresenham.rasterize(&shape).unwrap(), bresenham_line(0, 0, 5, 2));
        assert_eq!(RasterAlgorithm::Step.rasterize(&shape).unwrap(), stepwise(0, 0, 5, 2));
        assert_eq!(RasterAlgorithm::Dda.rasterize(&shape).unwrap(), dda(0, 0, 5, 2));
    }

    #[test]
    fn test_dispatch_circle() {
        let shape = Shape::from(Circle::new(1, 1, 4));
        assert_eq!(RasterAlgorithm::Circle.rasterize(&shape).unwrap(), bresenham_circle(1, 1, 4));
    }

    #[test]
    fn test_shape_mismatch() {
        let line = Shape::from(LineSegment::new(0, 0, 1, 1));
        let circle = Shape::from(Circle::new(0, 0, 3));

        let err = RasterAlgorithm::Circle.rasterize(&line).unwrap_err();
        assert!(matches!(err, RasterError::ShapeMismatch { shape: "line", .. }));
        assert_eq!(err.to_string(), "algorithm 'circle' cannot rasterize a line");

        for alg in [RasterAlgorithm::Step, RasterAlgorithm::Dda, RasterAlgorithm::Bresenham] {
            assert!(alg.rasterize(&circle).is_err());
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for alg in RasterAlgorithm::ALL {
            assert_eq!(alg.to_string().parse::<RasterAlgorithm>().unwrap(), alg);
        }
        assert_eq!("DDA".parse::<RasterAlgorithm>().unwrap(), RasterAlgorithm::Dda);
        assert!("wu".parse::<RasterAlgorithm>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&RasterAlgorithm::Bresenham).unwrap();
        assert_eq!(json, "\"bresenham\"");
    }
}
