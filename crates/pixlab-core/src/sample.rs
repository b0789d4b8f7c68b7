//! Storage rules for 8-bit samples.
//!
//! Pipeline stages compute in `f64` and only narrow to `u8` when a value is
//! written into a [`PixelBuffer`](crate::PixelBuffer). Narrowing follows
//! clamped-byte semantics: clamp to `[0, 255]`, round half to even, and
//! store NaN as 0.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::sample::{clamp_sample, to_byte};
//!
//! assert_eq!(to_byte(127.5), 128);
//! assert_eq!(to_byte(128.5), 128);
//! assert_eq!(to_byte(-4.0), 0);
//! assert_eq!(clamp_sample(300.0), 255.0);
//! ```

/// Largest value an 8-bit sample can hold.
pub const SAMPLE_MAX: f64 = 255.0;

/// Clamps a real intermediate into `[0, 255]` without narrowing it.
///
/// NaN is passed through unchanged so that a later [`to_byte`] stores it
/// as 0 instead of silently saturating it.
#[inline]
pub fn clamp_sample(v: f64) -> f64 {
    if v.is_nan() { v } else { v.clamp(0.0, SAMPLE_MAX) }
}

/// Narrows a real value into an 8-bit sample.
#[inline]
pub fn to_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, SAMPLE_MAX).round_ties_even() as u8
}

/// Rounds to the nearest integer, sending exact halves towards +infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. This is the rounding the rasterizers and the
/// color-model conversions are defined with, and it differs from
/// [`f64::round`] for negative halves.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}
