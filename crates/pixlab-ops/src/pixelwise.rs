//! Pixelwise brightness, contrast and invert.
//!
//! Applied to R, G and B independently; alpha passes through. The stages
//! run in a fixed order on a real-valued intermediate:
//!
//! 1. `v = clamp(v + brightness)`
//! 2. if contrast `c != 0`: `k = 259(c+1) / (255(1-c))`,
//!    `v = clamp(k(v - 128) + 128)`
//! 3. if invert: `v = 255 - v`
//!
//! Only the final value is narrowed to a byte.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::pixelwise::{apply_pixelwise, PixelwiseParams};
//!
//! let src = PixelBuffer::filled(2, 2, [100, 150, 200, 128]).unwrap();
//! let params = PixelwiseParams { brightness: 20, contrast: 0.0, invert: true };
//! let out = apply_pixelwise(&src, &params);
//! assert_eq!(out.get_pixel(0, 0), Some([135, 85, 35, 128]));
//! ```

use crate::{OpsError, OpsResult};
use pixlab_core::sample::{clamp_sample, to_byte};
use pixlab_core::{CHANNELS, PixelBuffer};
use tracing::{debug, trace};

/// Midpoint contrast pivots around.
pub const CONTRAST_PIVOT: f64 = 128.0;

/// Parameters for [`apply_pixelwise`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelwiseParams {
    /// Added to every color sample before clamping.
    pub brightness: i32,
    /// Contrast factor; 0 leaves contrast unchanged. UI scales in percent
    /// are divided by 100 by the caller.
    pub contrast: f64,
    /// Invert after brightness and contrast.
    pub invert: bool,
}

impl PixelwiseParams {
    /// Identity parameters.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns `true` if these parameters leave every buffer unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 0.0 && !self.invert
    }

    /// Working contrast coefficient, or `None` when contrast is disabled.
    ///
    /// ```rust
    /// use pixlab_ops::PixelwiseParams;
    ///
    /// let p = PixelwiseParams { contrast: 0.5, ..Default::default() };
    /// let k = p.contrast_coefficient().unwrap();
    /// assert!((k - 259.0 * 1.5 / (255.0 * 0.5)).abs() < 1e-12);
    /// ```
    pub fn contrast_coefficient(&self) -> Option<f64> {
        if self.contrast == 0.0 {
            return None;
        }
        let c = self.contrast;
        Some(259.0 * (c + 1.0) / (255.0 * (1.0 - c)))
    }

    /// Checks the contrast factor is usable.
    ///
    /// The transform itself accepts anything, but a non-finite factor or
    /// one at or above 1 makes the coefficient infinite or negative.
    /// Front ends call this before running the pipeline.
    pub fn validate(&self) -> OpsResult<()> {
        if !self.contrast.is_finite() {
            return Err(OpsError::InvalidParameter(format!(
                "contrast must be finite, got {}",
                self.contrast
            )));
        }
        if self.contrast >= 1.0 {
            return Err(OpsError::InvalidParameter(format!(
                "contrast must be below 1.0, got {}",
                self.contrast
            )));
        }
        Ok(())
    }
}

/// Applies the three stages to a single color sample.
#[inline]
pub fn adjust_sample(v: u8, brightness: i32, k: Option<f64>, invert: bool) -> u8 {
    let mut v = clamp_sample(v as f64 + brightness as f64);
    if let Some(k) = k {
        v = clamp_sample(k * (v - CONTRAST_PIVOT) + CONTRAST_PIVOT);
    }
    if invert {
        v = 255.0 - v;
    }
    to_byte(v)
}

/// Applies brightness, contrast and invert to every pixel.
pub fn apply_pixelwise(src: &PixelBuffer, params: &PixelwiseParams) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), ?params, "apply_pixelwise");

    let k = params.contrast_coefficient();
    if let Some(k) = k {
        debug!(contrast = params.contrast, coefficient = k, "Contrast enabled");
    }
    let (b, inv) = (params.brightness, params.invert);

    src.map_pixels(|[r, g, bl, a]| {
        [
            adjust_sample(r, b, k, inv),
            adjust_sample(g, b, k, inv),
            adjust_sample(bl, b, k, inv),
            a,
        ]
    })
}

/// Fills one pixel of output. Shared with the parallel scan.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
#[inline]
pub(crate) fn pixelwise_pixel(src: &[u8], dst: &mut [u8], brightness: i32, k: Option<f64>, invert: bool) {
    for c in 0..CHANNELS - 1 {
        dst[c] = adjust_sample(src[c], brightness, k, invert);
    }
    dst[CHANNELS - 1] = src[CHANNELS - 1];
}
