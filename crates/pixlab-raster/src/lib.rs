//! # pixlab-raster
//!
//! Lattice rasterizers and the tooling used to compare them.
//!
//! - [`line`] - Step-by-step, DDA and Bresenham line algorithms
//! - [`circle`] - Bresenham midpoint circle
//! - [`algorithm`] - [`RasterAlgorithm`] selector over a [`Shape`]
//! - [`timing`] - Wall-clock wrapper and the four-way comparison
//! - [`viewport`] - World/canvas mapping and a text plotter
//!
//! Every rasterizer is a pure function returning the ordered points it
//! visited; none of them can fail.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::LineSegment;
//! use pixlab_raster::{RasterAlgorithm, Shape};
//!
//! let shape = Shape::Line(LineSegment::new(0, 0, 5, 0));
//! let pts = RasterAlgorithm::Bresenham.rasterize(&shape).unwrap();
//! assert_eq!(pts.len(), 6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize algorithms, shapes and measurements

#![warn(missing_docs)]

pub mod algorithm;
pub mod circle;
mod error;
pub mod line;
pub mod timing;
pub mod viewport;

pub use algorithm::{RasterAlgorithm, Shape};
pub use circle::bresenham_circle;
pub use error::{RasterError, RasterResult};
pub use line::{bresenham_line, dda, stepwise};
pub use timing::{Measurement, Timed, measure_all, timed};
pub use viewport::Viewport;
