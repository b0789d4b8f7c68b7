//! Color models and conversions between them.
//!
//! RGB is the hub: CMYK and HSV convert to and from RGB, never to each
//! other directly. Components are integers in their display ranges:
//!
//! | Model | Components | Range |
//! |-------|------------|-------|
//! | RGB   | r, g, b    | 0..=255 |
//! | CMYK  | c, m, y, k | 0..=100 (percent) |
//! | HSV   | h          | 0..=360 (degrees) |
//! | HSV   | s, v       | 0..=100 (percent) |
//!
//! Every conversion computes in `f64` on unit-range values and rounds the
//! result half up (`x.5` goes to the next integer).
//!
//! # Example
//!
//! ```rust
//! use pixlab_color::{Cmyk, Hsv, Rgb, rgb_to_cmyk, rgb_to_hsv};
//!
//! let orange = Rgb::new(255, 128, 0);
//! assert_eq!(rgb_to_cmyk(orange), Cmyk::new(0, 50, 100, 0));
//! assert_eq!(rgb_to_hsv(orange), Hsv::new(30, 100, 100));
//! ```

use pixlab_core::sample::round_half_up;
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [self.r as f64 / 255.0, self.g as f64 / 255.0, self.b as f64 / 255.0]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// CMYK color in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan
    pub c: u8,
    /// Magenta
    pub m: u8,
    /// Yellow
    pub y: u8,
    /// Key (black)
    pub k: u8,
}

impl Cmyk {
    /// Creates a color.
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// HSV color: hue in degrees, saturation and value in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue, 0..=360
    pub h: u16,
    /// Saturation
    pub s: u8,
    /// Value
    pub v: u8,
}

impl Hsv {
    /// Creates a color.
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

#[inline]
fn percent(v: f64) -> u8 {
    round_half_up(v * 100.0).clamp(0.0, 100.0) as u8
}

#[inline]
fn channel(v: f64) -> u8 {
    round_half_up(v).clamp(0.0, 255.0) as u8
}

/// RGB to CMYK. Pure black is `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return Cmyk::new(0, 0, 0, 100);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(percent(c), percent(m), percent(y), percent(k))
}

/// CMYK to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.c as f64 / 100.0;
    let m = cmyk.m as f64 / 100.0;
    let y = cmyk.y as f64 / 100.0;
    let k = cmyk.k as f64 / 100.0;

    Rgb::new(
        channel(255.0 * (1.0 - c) * (1.0 - k)),
        channel(255.0 * (1.0 - m) * (1.0 - k)),
        channel(255.0 * (1.0 - y) * (1.0 - k)),
    )
}

/// RGB to HSV.
///
/// Grays have hue 0. Hue is rounded after scaling to degrees, so a
/// red-dominant color just below 360 degrees can report exactly 360.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else {
        // sextant position; `%` keeps the sign of the dividend
        let sector = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = round_half_up(sector * 60.0);
        if h < 0.0 { h + 360.0 } else { h }
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv::new(h as u16, percent(s), percent(max))
}

/// HSV to RGB. A hue of 360 wraps to the red sextant.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h as f64 / 360.0;
    let s = hsv.s as f64 / 100.0;
    let v = hsv.v as f64 / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(channel(r * 255.0), channel(g * 255.0), channel(b * 255.0))
}
