//! Grayscale conversion.
//!
//! Uses the Rec.601 luma weights. The luma is computed in `f64` and stored
//! as a clamped byte into R, G and B; alpha is copied unchanged.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::gray::to_grayscale;
//!
//! let src = PixelBuffer::filled(2, 2, [255, 0, 0, 90]).unwrap();
//! let gray = to_grayscale(&src);
//! // 0.299 * 255 = 76.245
//! assert_eq!(gray.get_pixel(0, 0), Some([76, 76, 76, 90]));
//! ```

use pixlab_core::PixelBuffer;
use pixlab_core::sample::to_byte;
use tracing::trace;

/// Red luma weight (Rec.601).
pub const LUMA_R: f64 = 0.299;
/// Green luma weight (Rec.601).
pub const LUMA_G: f64 = 0.587;
/// Blue luma weight (Rec.601).
pub const LUMA_B: f64 = 0.114;

/// Unrounded luma of an RGB triple.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Converts a buffer to grayscale, preserving alpha.
pub fn to_grayscale(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "to_grayscale");

    src.map_pixels(|[r, g, b, a]| {
        let y = to_byte(luma(r, g, b));
        [y, y, y, a]
    })
}
