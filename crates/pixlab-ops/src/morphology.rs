//! Grayscale morphology: erosion and dilation.
//!
//! Each output pixel is the minimum (erosion) or maximum (dilation) of the
//! R samples under the structuring element. The input is expected to be
//! grayscale, so R stands for all three color channels.
//!
//! # Border policy
//!
//! Offsets that fall outside the buffer are skipped: there is no padding
//! and no wraparound, so the effective neighborhood shrinks at the edges.
//!
//! # Alpha
//!
//! Output alpha is always 255, whatever the input alpha was.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::element::{ElementShape, StructuringElement};
//! use pixlab_ops::morphology::dilate;
//!
//! let mut data = vec![0u8; 3 * 3 * 4];
//! data[4 * 4] = 255; // center R
//! let src = PixelBuffer::from_rgba(3, 3, data).unwrap();
//! let se = StructuringElement::new(ElementShape::Rectangle, 3).unwrap();
//! let out = dilate(&src, &se).unwrap();
//! assert!(out.pixels().all(|p| p == [255, 255, 255, 255]));
//! ```

use crate::element::StructuringElement;
use crate::gray::to_grayscale;
use crate::{OpsError, OpsResult};
use pixlab_core::{CHANNELS, PixelBuffer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which neighborhood extreme to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MorphOp {
    /// Neighborhood minimum; shrinks bright regions.
    #[default]
    Erosion,
    /// Neighborhood maximum; grows bright regions.
    Dilation,
}

impl MorphOp {
    /// Value the scan starts from before any neighbor is seen.
    #[inline]
    fn identity(self) -> u8 {
        match self {
            Self::Erosion => 255,
            Self::Dilation => 0,
        }
    }

    #[inline]
    fn combine(self, acc: u8, v: u8) -> u8 {
        match self {
            Self::Erosion => acc.min(v),
            Self::Dilation => acc.max(v),
        }
    }
}

impl FromStr for MorphOp {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "erosion" | "erode" => Ok(Self::Erosion),
            "dilation" | "dilate" => Ok(Self::Dilation),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown morphology operation '{}' (expected erosion or dilation)",
                other
            ))),
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Erosion => f.write_str("erosion"),
            Self::Dilation => f.write_str("dilation"),
        }
    }
}

/// Morphological erosion of a grayscale buffer.
pub fn erode(gray: &PixelBuffer, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    morphology_op(gray, se, MorphOp::Erosion)
}

/// Morphological dilation of a grayscale buffer.
pub fn dilate(gray: &PixelBuffer, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    morphology_op(gray, se, MorphOp::Dilation)
}

/// Converts `src` to grayscale, then erodes or dilates it.
pub fn morphology(src: &PixelBuffer, op: MorphOp, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    debug!(%op, shape = %se.shape(), size = se.size(), "Applying morphology");
    let gray = to_grayscale(src);
    morphology_op(&gray, se, op)
}

fn morphology_op(src: &PixelBuffer, se: &StructuringElement, op: MorphOp) -> OpsResult<PixelBuffer> {
    trace!(width = src.width(), height = src.height(), %op, offsets = se.len(), "morphology_op");

    let mut dst = vec![0u8; src.data().len()];
    let row_len = src.row_len();
    if row_len > 0 {
        for (y, row) in dst.chunks_exact_mut(row_len).enumerate() {
            morph_row(src, se, op, y, row);
        }
    }

    Ok(src.with_data_of(dst)?)
}

/// Fills one output row. Shared by the sequential and parallel scans.
pub(crate) fn morph_row(
    src: &PixelBuffer,
    se: &StructuringElement,
    op: MorphOp,
    y: usize,
    row: &mut [u8],
) {
    let width = src.width() as i64;
    let height = src.height() as i64;
    let data = src.data();

    for x in 0..src.width() as usize {
        let mut val = op.identity();

        for &(dx, dy) in se.offsets() {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }
            val = op.combine(val, data[src.offset(nx as usize, ny as usize)]);
        }

        let i = x * CHANNELS;
        row[i] = val;
        row[i + 1] = val;
        row[i + 2] = val;
        row[i + 3] = 255;
    }
}
