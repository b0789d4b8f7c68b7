//! Wall-clock timing around the rasterizers.
//!
//! The rasterizers themselves are pure; timing is layered on top with
//! [`timed`], and [`measure_all`] builds the side-by-side comparison of all
//! four algorithms.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::{Circle, LineSegment};
//! use pixlab_raster::timing::measure_all;
//!
//! let rows = measure_all(&LineSegment::new(0, 0, 40, 15), &Circle::new(0, 0, 20));
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[2].points, 41);
//! ```

use crate::algorithm::{RasterAlgorithm, Shape};
use crate::circle::bresenham_circle;
use crate::line::{bresenham_line, dda, stepwise};
use pixlab_core::{Circle, LineSegment};
use std::time::{Duration, Instant};
use tracing::debug;

/// A value together with how long it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    /// What the closure returned
    pub value: T,
    /// Wall-clock time spent in the closure
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs `f` and records its wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// One row of an algorithm comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Which rasterizer ran
    pub algorithm: RasterAlgorithm,
    /// Shape it ran on
    pub shape: Shape,
    /// Number of points emitted
    pub points: usize,
    /// Wall-clock time
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs every algorithm once: the three line algorithms on `line`, the
/// circle algorithm on `circle`.
pub fn measure_all(line: &LineSegment, circle: &Circle) -> Vec<Measurement> {
    let (s, e) = (line.start, line.end);

    let runs = [
        (RasterAlgorithm::Step, Shape::Line(*line), timed(|| stepwise(s.x, s.y, e.x, e.y))),
        (RasterAlgorithm::Dda, Shape::Line(*line), timed(|| dda(s.x, s.y, e.x, e.y))),
        (RasterAlgorithm::Bresenham, Shape::Line(*line), timed(|| bresenham_line(s.x, s.y, e.x, e.y))),
        (
            RasterAlgorithm::Circle,
            Shape::Circle(*circle),
            timed(|| bresenham_circle(circle.center.x, circle.center.y, circle.radius)),
        ),
    ];

    runs.into_iter()
        .map(|(algorithm, shape, run)| {
            debug!(%algorithm, points = run.value.len(), elapsed_ms = run.millis(), "Measured");
            Measurement {
                algorithm,
                shape,
                points: run.value.len(),
                elapsed: run.elapsed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_passes_value_through() {
        let t = timed(|| 6 * 7);
        assert_eq!(t.value, 42);
        assert!(t.millis() >= 0.0);
    }

    #[test]
    fn test_measure_all_rows() {
        let line = LineSegment::new(-3, 2, 9, 7);
        let circle = Circle::new(0, 0, 5);
        let rows = measure_all(&line, &circle);

        let algs: Vec<RasterAlgorithm> = rows.iter().map(|m| m.algorithm).collect();
        assert_eq!(algs, RasterAlgorithm::ALL.to_vec());

        // 12 steps along x for every line algorithm
        assert_eq!(rows[0].points, 13);
        assert_eq!(rows[1].points, 13);
        assert_eq!(rows[2].points, 13);
        assert_eq!(rows[3].points, 40);
        assert_eq!(rows[3].shape, Shape::Circle(circle));
    }
}
