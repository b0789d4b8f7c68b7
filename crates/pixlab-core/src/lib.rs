//! # pixlab-core
//!
//! Core types shared by the pixlab crates.
//!
//! - [`PixelBuffer`] - Dense row-major RGBA8 image buffer
//! - [`sample`] - Rules for storing real intermediates into 8-bit samples
//! - [`Point2D`], [`LineSegment`], [`Circle`] - Integer lattice geometry
//! - [`raw`] - Headerless RGBA8 sample files
//! - [`Error`] / [`Result`] - Error type for buffer construction and validation
//!
//! ## Crate Structure
//!
//! ```text
//! pixlab-core (this crate)
//!    ^
//!    |
//!    +-- pixlab-ops (grayscale, morphology, pixelwise, contrast stretch)
//!    +-- pixlab-raster (step / DDA / Bresenham rasterizers)
//!    +-- pixlab-color (RGB / CMYK / HSV / hex)
//!    +-- pixlab-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for geometry types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod geom;
pub mod raw;
pub mod sample;

pub use buffer::{CHANNELS, PixelBuffer};
pub use error::{Error, Result};
pub use geom::{Circle, LineSegment, Point2D};

/// Prelude module for convenient imports.
///
/// ```
/// use pixlab_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{CHANNELS, PixelBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::geom::{Circle, LineSegment, Point2D};
    pub use crate::sample::{clamp_sample, to_byte};
}
