//! Min-max linear contrast stretch.
//!
//! Each color channel is remapped independently so that its observed
//! `[min, max]` range covers `[0, 255]`. This needs two passes: global
//! statistics first, then the remap.
//!
//! A constant channel (`min == max`) is widened to `[min, min + 1]`, so it
//! maps to 0 instead of dividing by zero.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::stretch::linear_contrast_stretch;
//!
//! let src = PixelBuffer::from_fn(2, 1, |x, _| if x == 0 { [50, 50, 50, 255] } else { [150, 150, 150, 255] })
//!     .unwrap();
//! let out = linear_contrast_stretch(&src);
//! assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 255]));
//! assert_eq!(out.get_pixel(1, 0), Some([255, 255, 255, 255]));
//! ```

use pixlab_core::PixelBuffer;
use pixlab_core::sample::{clamp_sample, to_byte};
use tracing::{debug, trace};

/// Per-channel extremes over R, G and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    /// Smallest sample per channel
    pub min: [u8; 3],
    /// Largest sample per channel
    pub max: [u8; 3],
}

impl ChannelStats {
    /// Collects min/max for R, G and B in one pass.
    ///
    /// An empty buffer reports `min = 255, max = 0`.
    pub fn collect(src: &PixelBuffer) -> Self {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];
        for px in src.pixels() {
            for c in 0..3 {
                min[c] = min[c].min(px[c]);
                max[c] = max[c].max(px[c]);
            }
        }
        Self { min, max }
    }

    /// Scale factor mapping channel `c` onto `[0, 255]`, applying the
    /// constant-channel fallback.
    pub fn factor(&self, c: usize) -> f64 {
        let min = self.min[c] as f64;
        let mut max = self.max[c] as f64;
        if max == min {
            max = min + 1.0;
        }
        255.0 / (max - min)
    }
}

/// Stretches each color channel to the full 8-bit range. Alpha passes through.
pub fn linear_contrast_stretch(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "linear_contrast_stretch");

    let stats = ChannelStats::collect(src);
    let factors = [stats.factor(0), stats.factor(1), stats.factor(2)];
    debug!(min = ?stats.min, max = ?stats.max, ?factors, "Channel stats");

    let remap = |c: usize, v: u8| to_byte(clamp_sample(factors[c] * (v as f64 - stats.min[c] as f64)));
    src.map_pixels(|[r, g, b, a]| [remap(0, r), remap(1, g), remap(2, b), a])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let src = PixelBuffer::from_fn(3, 1, |x, _| [10 + x as u8, 200 - x as u8 * 50, 7, 0]).unwrap();
        let stats = ChannelStats::collect(&src);
        assert_eq!(stats.min, [10, 100, 7]);
        assert_eq!(stats.max, [12, 200, 7]);
    }

    #[test]
    fn test_full_range_per_channel() {
        let src = PixelBuffer::from_fn(8, 8, |x, y| {
            [60 + x as u8 * 10, 100 + y as u8, 30 + (x + y) as u8 * 3, 17]
        })
        .unwrap();
        let out = linear_contrast_stretch(&src);
        let stats = ChannelStats::collect(&out);
        assert_eq!(stats.min, [0, 0, 0]);
        assert_eq!(stats.max, [255, 255, 255]);
        assert!(out.pixels().all(|p| p[3] == 17));
    }

    #[test]
    fn test_midpoint_rounding() {
        // [0, 2] -> factor 127.5, so the middle sample lands exactly on 127.5
        // and stores as 128 (half to even).
        let src = PixelBuffer::from_fn(3, 1, |x, _| [x as u8, 0, 0, 255]).unwrap();
        let out = linear_contrast_stretch(&src);
        let reds: Vec<u8> = out.pixels().map(|p| p[0]).collect();
        assert_eq!(reds, vec![0, 128, 255]);
    }

    #[test]
    fn test_constant_channel_maps_to_zero() {
        let src = PixelBuffer::filled(4, 4, [90, 90, 90, 200]).unwrap();
        let stats = ChannelStats::collect(&src);
        assert_eq!(stats.factor(0), 255.0);

        let out = linear_contrast_stretch(&src);
        assert!(out.pixels().all(|p| p == [0, 0, 0, 200]));
    }

    #[test]
    fn test_already_full_range_unchanged() {
        let src = PixelBuffer::from_fn(256, 1, |x, _| [x as u8, 255 - x as u8, x as u8, 255]).unwrap();
        assert_eq!(linear_contrast_stretch(&src), src);
    }

    #[test]
    fn test_empty_buffer() {
        let src = PixelBuffer::new(0, 0).unwrap();
        let stats = ChannelStats::collect(&src);
        assert_eq!(stats.min, [255; 3]);
        assert_eq!(stats.max, [0; 3]);
        assert!(linear_contrast_stretch(&src).is_empty());
    }
}
