//! # pixlab-color
//!
//! Conversions between the RGB, CMYK, HSV and hex color models, and a
//! [`ColorEditor`] that keeps all four in step while one of them is
//! edited.
//!
//! - [`model`] - [`Rgb`], [`Cmyk`], [`Hsv`] and the conversions through RGB
//! - [`hex`] - `#rrggbb` formatting and parsing
//! - [`editor`] - Linked multi-model editing
//!
//! # Example
//!
//! ```rust
//! use pixlab_color::{hex_to_rgb, rgb_to_hsv, Hsv};
//!
//! let rgb = hex_to_rgb("#00ff00").unwrap();
//! assert_eq!(rgb_to_hsv(rgb), Hsv::new(120, 100, 100));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize color values and editor state

#![warn(missing_docs)]

pub mod editor;
mod error;
pub mod hex;
pub mod model;

pub use editor::{ColorEditor, ColorModel};
pub use error::{ColorError, ColorResult};
pub use hex::{hex_to_rgb, parse_components, rgb_to_hex};
pub use model::{Cmyk, Hsv, Rgb, cmyk_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsv};
