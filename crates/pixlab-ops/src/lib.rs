//! # pixlab-ops
//!
//! Pixel transform pipeline over RGBA8 [`PixelBuffer`]s.
//!
//! Every operation borrows its input and returns a freshly allocated
//! buffer of identical dimensions; nothing is mutated in place.
//!
//! # Modules
//!
//! - [`gray`] - Luma grayscale conversion
//! - [`element`] - Structuring elements (rectangle, cross)
//! - [`morphology`] - Erosion and dilation
//! - [`pixelwise`] - Brightness, contrast and invert
//! - [`stretch`] - Per-channel min/max linear contrast stretch
//! - [`pipeline`] - Processing modes composing the stages above
//! - `parallel` - Rayon row-parallel morphology and pixelwise scans
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::element::{ElementShape, StructuringElement};
//! use pixlab_ops::{gray, morphology};
//!
//! let src = PixelBuffer::filled(8, 8, [200, 100, 50, 255]).unwrap();
//! let se = StructuringElement::new(ElementShape::Cross, 3).unwrap();
//! let eroded = morphology::erode(&gray::to_grayscale(&src), &se).unwrap();
//! assert_eq!(eroded.dimensions(), (8, 8));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Rayon scans; [`process`] uses them when enabled
//!
//! [`PixelBuffer`]: pixlab_core::PixelBuffer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod element;
pub mod gray;
pub mod morphology;
pub mod pipeline;
pub mod pixelwise;
pub mod stretch;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use element::{ElementShape, StructuringElement};
pub use error::{OpsError, OpsResult};
pub use morphology::MorphOp;
pub use pipeline::{Method, ProcessingParameters, process};
pub use pixelwise::PixelwiseParams;
