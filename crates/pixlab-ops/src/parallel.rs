//! Parallel pixel operations using Rayon.
//!
//! Each output pixel depends only on read-only input, so rows (morphology)
//! and pixels (pixelwise) are processed independently. Results are
//! byte-identical to the sequential versions.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::element::{ElementShape, StructuringElement};
//! use pixlab_ops::parallel;
//!
//! let src = PixelBuffer::filled(256, 256, [128, 128, 128, 255]).unwrap();
//! let se = StructuringElement::new(ElementShape::Rectangle, 5).unwrap();
//! let eroded = parallel::erode(&src, &se).unwrap();
//! assert_eq!(eroded.dimensions(), (256, 256));
//! ```

use crate::element::StructuringElement;
use crate::gray::to_grayscale;
use crate::morphology::{MorphOp, morph_row};
use crate::pixelwise::{PixelwiseParams, pixelwise_pixel};
use crate::OpsResult;
use pixlab_core::{CHANNELS, PixelBuffer};
use rayon::prelude::*;
use tracing::trace;

/// Parallel erosion of a grayscale buffer.
pub fn erode(gray: &PixelBuffer, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    morphology_par(gray, se, MorphOp::Erosion)
}

/// Parallel dilation of a grayscale buffer.
pub fn dilate(gray: &PixelBuffer, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    morphology_par(gray, se, MorphOp::Dilation)
}

/// Parallel grayscale-then-morphology.
pub fn morphology(src: &PixelBuffer, op: MorphOp, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    let gray = to_grayscale(src);
    morphology_par(&gray, se, op)
}

fn morphology_par(src: &PixelBuffer, se: &StructuringElement, op: MorphOp) -> OpsResult<PixelBuffer> {
    trace!(width = src.width(), height = src.height(), %op, offsets = se.len(), "morphology_par");

    let mut dst = vec![0u8; src.data().len()];
    let row_len = src.row_len();
    if row_len > 0 {
        dst.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| morph_row(src, se, op, y, row));
    }

    Ok(src.with_data_of(dst)?)
}

/// Parallel brightness/contrast/invert.
pub fn apply_pixelwise(src: &PixelBuffer, params: &PixelwiseParams) -> OpsResult<PixelBuffer> {
    trace!(width = src.width(), height = src.height(), ?params, "apply_pixelwise_par");

    let k = params.contrast_coefficient();
    let (b, inv) = (params.brightness, params.invert);

    let mut dst = vec![0u8; src.data().len()];
    dst.par_chunks_mut(CHANNELS)
        .zip(src.data().par_chunks(CHANNELS))
        .for_each(|(out, px)| pixelwise_pixel(px, out, b, k, inv));

    Ok(src.with_data_of(dst)?)
}
