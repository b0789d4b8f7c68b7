//! Bresenham midpoint circle.
//!
//! Walks one octant from the top of the circle and mirrors every step into
//! all eight octants. Points are emitted as the walk produces them, so
//! cells on the axes and diagonals appear more than once. Points past the
//! `i32` range saturate at its bounds.

use pixlab_core::Point2D;
use tracing::trace;

/// Rasterizes a circle outline around `(cx, cy)`.
///
/// Each step emits eight points in the order
/// `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`
/// relative to the center. A zero radius emits just the center.
///
/// ```rust
/// use pixlab_core::Point2D;
/// use pixlab_raster::circle::bresenham_circle;
///
/// let pts = bresenham_circle(10, 10, 3);
/// assert_eq!(pts[0], Point2D::new(10, 13));
/// assert_eq!(pts.len() % 8, 0);
/// ```
pub fn bresenham_circle(cx: i32, cy: i32, radius: u32) -> Vec<Point2D> {
    trace!(cx, cy, radius, "bresenham_circle");

    if radius == 0 {
        return vec![Point2D::new(cx, cy)];
    }

    let (cx, cy) = (cx as i64, cy as i64);
    let mut x: i64 = 0;
    let mut y = radius as i64;
    let mut d = 3 - 2 * y;

    // roughly r/sqrt(2) steps per octant walk
    let mut points = Vec::with_capacity(8 * (radius as usize * 3 / 4 + 2));
    push_octants(&mut points, cx, cy, x, y);

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        push_octants(&mut points, cx, cy, x, y);
    }
    points
}

fn push_octants(points: &mut Vec<Point2D>, cx: i64, cy: i64, x: i64, y: i64) {
    let at = |dx: i64, dy: i64| Point2D::new(saturate(cx + dx), saturate(cy + dy));
    points.extend([
        at(x, y),
        at(-x, y),
        at(x, -y),
        at(-x, -y),
        at(y, x),
        at(-y, x),
        at(y, -x),
        at(-y, -x),
    ]);
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_radius() {
        assert_eq!(bresenham_circle(4, -2, 0), vec![Point2D::new(4, -2)]);
    }

    #[test]
    fn test_first_step_order() {
        let pts = bresenham_circle(0, 0, 5);
        let expected: Vec<Point2D> = [(0, 5), (0, 5), (0, -5), (0, -5), (5, 0), (-5, 0), (5, 0), (-5, 0)]
            .into_iter()
            .map(Point2D::from)
            .collect();
        assert_eq!(&pts[..8], &expected[..]);
    }

    #[test]
    fn test_radius_five_steps() {
        // octant walk: (0,5) (1,5) (2,4) (3,3) (4,2)
        let pts = bresenham_circle(0, 0, 5);
        assert_eq!(pts.len(), 40);
        let leads: Vec<Point2D> = pts.chunks(8).map(|c| c[0]).collect();
        let expected: Vec<Point2D> = [(0, 5), (1, 5), (2, 4), (3, 3), (4, 2)]
            .into_iter()
            .map(Point2D::from)
            .collect();
        assert_eq!(leads, expected);
    }

    #[test]
    fn test_radius_five_near_circle() {
        for p in bresenham_circle(0, 0, 5) {
            let r = ((p.x * p.x + p.y * p.y) as f64).sqrt().round() as i32;
            assert!((4..=6).contains(&r), "{} at distance {}", p, r);
        }
    }

    #[test]
    fn test_symmetry() {
        for radius in [1, 2, 5, 12, 31] {
            let set: HashSet<Point2D> = bresenham_circle(0, 0, radius).into_iter().collect();
            for p in &set {
                for q in [(p.x, -p.y), (-p.x, p.y), (p.y, p.x), (-p.y, -p.x)] {
                    assert!(set.contains(&Point2D::from(q)), "radius {} missing {:?}", radius, q);
                }
            }
        }
    }

    #[test]
    fn test_offset_center() {
        let origin = bresenham_circle(0, 0, 7);
        let shifted = bresenham_circle(-20, 13, 7);
        assert_eq!(origin.len(), shifted.len());
        for (a, b) in origin.iter().zip(&shifted) {
            assert_eq!((b.x - a.x, b.y - a.y), (-20, 13));
        }
    }

    #[test]
    fn test_saturates_at_i32_bounds() {
        let pts = bresenham_circle(i32::MAX - 2, i32::MIN + 1, 5);
        assert!(pts.iter().all(|p| p.x >= i32::MAX - 7 && p.y <= i32::MIN + 6));
        assert!(pts.contains(&Point2D::new(i32::MAX, i32::MIN + 1)));
        assert!(pts.contains(&Point2D::new(i32::MAX - 2, i32::MIN)));
    }
}
