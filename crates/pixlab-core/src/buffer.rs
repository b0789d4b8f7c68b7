//! RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the unit every pipeline stage consumes and produces:
//! `width * height` pixels stored row-major, four interleaved `u8`
//! channels per pixel (R, G, B, A).
//!
//! # Invariants
//!
//! - `data.len() == width * height * 4`, checked at construction
//! - stages never mutate their input; they allocate a fresh buffer
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//!
//! let buf = PixelBuffer::filled(4, 2, [10, 20, 30, 255]).unwrap();
//! assert_eq!(buf.dimensions(), (4, 2));
//! assert_eq!(buf.get_pixel(3, 1), Some([10, 20, 30, 255]));
//! assert_eq!(buf.data().len(), 4 * 2 * 4);
//! ```

use crate::error::{Error, Result};
use std::slice::ChunksExact;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the alpha channel inside a pixel.
pub const ALPHA: usize = 3;

/// Dense row-major RGBA8 image buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

/// Number of samples a `width x height` buffer holds, or an error on overflow.
fn sample_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows usize"))
}

impl PixelBuffer {
    /// Creates a fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Creates a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Result<Self> {
        let len = sample_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&pixel);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wraps already-decoded interleaved RGBA8 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    ///
    /// ```rust
    /// use pixlab_core::PixelBuffer;
    ///
    /// let ramp = PixelBuffer::from_fn(3, 1, |x, _| [x as u8 * 100, 0, 0, 255]).unwrap();
    /// assert_eq!(ramp.get_pixel(2, 0), Some([200, 0, 0, 255]));
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS],
    {
        let len = sample_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the buffer dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sample offset of pixel `(x, y)`. The caller guarantees the coordinates are in bounds.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x as usize, y as usize);
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; CHANNELS]> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Iterates over pixels in row-major order, four samples each.
    #[inline]
    pub fn pixels(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Produces a new buffer of the same size by mapping every pixel.
    ///
    /// ```rust
    /// use pixlab_core::PixelBuffer;
    ///
    /// let src = PixelBuffer::filled(2, 2, [1, 2, 3, 4]).unwrap();
    /// let swapped = src.map_pixels(|[r, g, b, a]| [b, g, r, a]);
    /// assert_eq!(swapped.get_pixel(0, 0), Some([3, 2, 1, 4]));
    /// assert_eq!(src.get_pixel(0, 0), Some([1, 2, 3, 4]));
    /// ```
    pub fn map_pixels<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn([u8; CHANNELS]) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.pixels() {
            data.extend_from_slice(&f([px[0], px[1], px[2], px[3]]));
        }
        PixelBuffer {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Wraps `data` in a new buffer with the same dimensions as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` has a different length.
    pub fn with_data_of(&self, data: Vec<u8>) -> Result<PixelBuffer> {
        PixelBuffer::from_rgba(self.width, self.height, data)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("samples", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_rejects_short_data() {
        let err = PixelBuffer::from_rgba(3, 3, vec![0; 35]).unwrap_err();
        assert!(err.is_dimension_error());
        assert!(err.to_string().contains("expected 36 samples, got 35"));
    }

    #[test]
    fn test_from_rgba_rejects_long_data() {
        assert!(PixelBuffer::from_rgba(1, 1, vec![0; 5]).is_err());
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert!(PixelBuffer::new(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::from_rgba(0, 5, Vec::new()).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.pixel_count(), 0);
    }

    #[test]
    fn test_pixel_access() {
        let buf = PixelBuffer::from_fn(4, 3, |x, y| [x as u8, y as u8, 7, 255]).unwrap();
        assert_eq!(buf.get_pixel(2, 1), Some([2, 1, 7, 255]));
        assert_eq!(buf.get_pixel(4, 0), None);
        assert_eq!(buf.pixel(1, 2).unwrap(), [1, 2, 7, 255]);
        assert!(buf.pixel(0, 3).is_err());
        assert_eq!(buf.offset(1, 1), (4 + 1) * 4);
    }

    #[test]
    fn test_pixels_iterates_row_major() {
        let buf = PixelBuffer::from_fn(2, 2, |x, y| [(y * 2 + x) as u8, 0, 0, 0]).unwrap();
        let firsts: Vec<u8> = buf.pixels().map(|p| p[0]).collect();
        assert_eq!(firsts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_debug_omits_samples() {
        let buf = PixelBuffer::new(16, 16).unwrap();
        let s = format!("{:?}", buf);
        assert!(s.contains("width: 16"));
        assert!(s.contains("samples: 1024"));
    }
}
