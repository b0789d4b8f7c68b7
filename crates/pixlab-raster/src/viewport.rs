//! Mapping between world lattice points and a zoomed canvas.
//!
//! World space has its origin at the canvas center and y pointing up. One
//! world unit covers `scale` canvas pixels, so the visible grid is
//! `ceil(width / scale)` by `ceil(height / scale)` cells.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::Point2D;
//! use pixlab_raster::viewport::Viewport;
//!
//! let vp = Viewport::new(20, 10, 1.0).unwrap();
//! assert_eq!(vp.to_canvas(Point2D::new(0, 0)), Some((10, 5)));
//! assert_eq!(vp.to_canvas(Point2D::new(3, 2)), Some((13, 3)));
//! assert_eq!(vp.to_canvas(Point2D::new(50, 0)), None);
//! ```

use crate::{RasterError, RasterResult};
use pixlab_core::Point2D;
use pixlab_core::sample::round_half_up;
use tracing::trace;

/// Background cell in [`Viewport::plot`].
pub const EMPTY: char = '.';
/// Painted cell in [`Viewport::plot`].
pub const PAINTED: char = '#';
/// Largest grid, in cells, a viewport may cover.
pub const MAX_GRID_CELLS: u64 = 1 << 24;

/// A canvas of `width x height` pixels showing world space at `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale: f64,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Errors
    ///
    /// [`RasterError::InvalidParameter`] when `scale` is not a finite
    /// positive number, or when the resulting grid exceeds
    /// [`MAX_GRID_CELLS`].
    pub fn new(width: u32, height: u32, scale: f64) -> RasterResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RasterError::InvalidParameter(format!(
                "scale must be finite and positive, got {}",
                scale
            )));
        }

        let cols = (width as f64 / scale).ceil();
        let rows = (height as f64 / scale).ceil();
        if cols * rows > MAX_GRID_CELLS as f64 {
            return Err(RasterError::InvalidParameter(format!(
                "{}x{} at scale {} needs a {}x{} grid, more than {} cells",
                width, height, scale, cols, rows, MAX_GRID_CELLS
            )));
        }
        Ok(Self { width, height, scale })
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Zoom factor.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Visible grid size in cells.
    pub fn grid_size(&self) -> (u32, u32) {
        (
            (self.width as f64 / self.scale).ceil() as u32,
            (self.height as f64 / self.scale).ceil() as u32,
        )
    }

    /// Grid cell showing world point `p`, or `None` if it is off-canvas.
    pub fn to_canvas(&self, p: Point2D) -> Option<(u32, u32)> {
        let cols = self.width as f64 / self.scale;
        let rows = self.height as f64 / self.scale;

        let px = round_half_up(cols / 2.0 + p.x as f64);
        let py = round_half_up(rows / 2.0 - p.y as f64);
        if px < 0.0 || py < 0.0 || px >= cols || py >= rows {
            return None;
        }
        Some((px as u32, py as u32))
    }

    /// World point under canvas pixel `(px, py)`, in unzoomed pixels.
    pub fn to_world(&self, px: f64, py: f64) -> Point2D {
        let x = round_half_up((px - self.width as f64 / 2.0) / self.scale);
        let y = round_half_up(-(py - self.height as f64 / 2.0) / self.scale);
        Point2D::new(x as i32, y as i32)
    }

    /// Renders `points` over the axes as rows of text.
    ///
    /// The x axis is drawn with `-`, the y axis with `|`, the origin with
    /// `+`, and every visible point with `#`. Off-canvas points are
    /// dropped. Rows are joined with `\n`.
    pub fn plot(&self, points: &[Point2D]) -> String {
        let (cols, rows) = self.grid_size();
        trace!(cols, rows, points = points.len(), "plot");

        let mut grid = vec![vec![EMPTY; cols as usize]; rows as usize];

        if let Some((ox, oy)) = self.to_canvas(Point2D::new(0, 0)) {
            for cell in grid[oy as usize].iter_mut() {
                *cell = '-';
            }
            for row in grid.iter_mut() {
                row[ox as usize] = '|';
            }
            grid[oy as usize][ox as usize] = '+';
        }

        for &p in points {
            if let Some((x, y)) = self.to_canvas(p) {
                grid[y as usize][x as usize] = PAINTED;
            }
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
