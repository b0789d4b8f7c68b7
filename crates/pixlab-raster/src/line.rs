//! Line rasterizers.
//!
//! Three ways of turning two lattice endpoints into an ordered run of cells,
//! from the naive floating-point walk to the integer-only Bresenham loop.
//! All of them emit both endpoints and walk from `(x1, y1)` to `(x2, y2)`.
//!
//! Coordinates are widened to `i64` internally, so even segments spanning
//! the whole `i32` range cannot overflow the error terms.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::Point2D;
//! use pixlab_raster::line::bresenham_line;
//!
//! let pts = bresenham_line(0, 0, 4, 2);
//! assert_eq!(pts.first(), Some(&Point2D::new(0, 0)));
//! assert_eq!(pts.last(), Some(&Point2D::new(4, 2)));
//! assert_eq!(pts.len(), 5);
//! ```

use pixlab_core::Point2D;
use pixlab_core::sample::round_half_up;
use tracing::trace;

/// Step-by-step line: sample along the major axis, round each coordinate.
///
/// The increments are added to a running position, so rounding error
/// accumulates exactly as a naive loop would accumulate it.
pub fn stepwise(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Point2D> {
    trace!(x1, y1, x2, y2, "stepwise");
    walk(x1, y1, x2, y2, 0.0, round_half_up)
}

/// Digital differential analyzer: start half a cell in, truncate each
/// coordinate with `floor`.
pub fn dda(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Point2D> {
    trace!(x1, y1, x2, y2, "dda");
    walk(x1, y1, x2, y2, 0.5, f64::floor)
}

fn walk(x1: i32, y1: i32, x2: i32, y2: i32, bias: f64, snap: fn(f64) -> f64) -> Vec<Point2D> {
    let dx = x2 as i64 - x1 as i64;
    let dy = y2 as i64 - y1 as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![Point2D::new(x1, y1)];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = x1 as f64 + bias;
    let mut y = y1 as f64 + bias;

    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        points.push(Point2D::new(snap(x) as i32, snap(y) as i32));
        x += x_inc;
        y += y_inc;
    }
    points
}

/// Bresenham's integer line algorithm.
///
/// Emits exactly `max(|dx|, |dy|) + 1` cells with no duplicates.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Point2D> {
    trace!(x1, y1, x2, y2, "bresenham_line");

    let (mut x, mut y) = (x1 as i64, y1 as i64);
    let (x2, y2) = (x2 as i64, y2 as i64);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        points.push(Point2D::new(x as i32, y as i32));

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point2D> {
        raw.iter().copied().map(Point2D::from).collect()
    }

    #[test]
    fn test_bresenham_horizontal() {
        let line = bresenham_line(0, 0, 5, 0);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_bresenham_shallow() {
        let line = bresenham_line(0, 0, 4, 2);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_bresenham_reversed() {
        let line = bresenham_line(3, 3, 0, 0);
        assert_eq!(line, pts(&[(3, 3), (2, 2), (1, 1), (0, 0)]));
    }

    #[test]
    fn test_bresenham_count_and_unit_steps() {
        for &(x2, y2) in &[(7, 3), (-9, 4), (2, -11), (-6, -6), (0, 13)] {
            let line = bresenham_line(1, -1, x2, y2);
            let (dx, dy) = ((x2 - 1).abs(), (y2 + 1).abs());
            assert_eq!(line.len(), dx.max(dy) as usize + 1);
            for pair in line.windows(2) {
                assert!((pair[1].x - pair[0].x).abs() <= 1);
                assert!((pair[1].y - pair[0].y).abs() <= 1);
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_stepwise_rounds_half_up() {
        // y increments by 0.5: 0, 0.5, 1.0, 1.5, 2.0
        let line = stepwise(0, 0, 4, 2);
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_stepwise_negative_half() {
        // -0.5 rounds up to 0, -1.5 to -1
        let line = stepwise(0, 0, 4, -2);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, -1), (3, -1), (4, -2)]));
    }

    #[test]
    fn test_dda_floor_from_half() {
        // y = 0.5, 1.0, 1.5, 2.0, 2.5 -> floor
        let line = dda(0, 0, 4, 2);
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(stepwise(3, -4, 3, -4), pts(&[(3, -4)]));
        assert_eq!(dda(3, -4, 3, -4), pts(&[(3, -4)]));
        assert_eq!(bresenham_line(3, -4, 3, -4), pts(&[(3, -4)]));
    }

    #[test]
    fn test_algorithms_agree_on_axis_lines() {
        for &(x1, y1, x2, y2) in &[(0, 0, 9, 0), (5, 2, -3, 2), (-1, -7, -1, 4), (2, 6, 2, -6)] {
            let b = bresenham_line(x1, y1, x2, y2);
            assert_eq!(stepwise(x1, y1, x2, y2), b);
            assert_eq!(dda(x1, y1, x2, y2), b);
        }
    }

    #[test]
    fn test_algorithms_agree_on_diagonals() {
        for &(x2, y2) in &[(6, 6), (-6, 6), (6, -6), (-6, -6)] {
            let b = bresenham_line(0, 0, x2, y2);
            assert_eq!(stepwise(0, 0, x2, y2), b);
            assert_eq!(dda(0, 0, x2, y2), b);
        }
    }

    #[test]
    fn test_float_walks_reach_endpoint() {
        for &(x2, y2) in &[(10, 3), (-17, 5), (4, -19), (-8, -8)] {
            assert_eq!(stepwise(0, 0, x2, y2).last(), Some(&Point2D::new(x2, y2)));
            assert_eq!(dda(0, 0, x2, y2).len(), x2.abs().max(y2.abs()) as usize + 1);
        }
    }
}
