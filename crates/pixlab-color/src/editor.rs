//! A color shown in several models at once.
//!
//! [`ColorEditor`] keeps RGB, CMYK, HSV and hex views of one color in step.
//! Each setter names the model being edited: the edited values are kept
//! as entered (clamped to their range), RGB is derived from them, and the
//! remaining models are derived from RGB. Because CMYK and HSV are
//! rounded, re-deriving the edited model from RGB would not necessarily
//! give back the entered values, so it is left alone.
//!
//! # Example
//!
//! ```rust
//! use pixlab_color::{ColorEditor, Cmyk, Rgb};
//!
//! let mut editor = ColorEditor::new();
//! editor.set_cmyk(0, 50, 100, 0);
//! assert_eq!(editor.rgb(), Rgb::new(255, 128, 0));
//! assert_eq!(editor.hex(), "#ff8000");
//! assert_eq!(editor.cmyk(), Cmyk::new(0, 50, 100, 0));
//! ```

use crate::hex::{hex_to_rgb, rgb_to_hex};
use crate::model::{Cmyk, Hsv, Rgb, cmyk_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsv};
use crate::ColorResult;
use std::fmt;
use tracing::debug;

/// Which model an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorModel {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Cyan, magenta, yellow, key
    Cmyk,
    /// Hue, saturation, value
    Hsv,
    /// `#rrggbb`
    Hex,
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => f.write_str("rgb"),
            Self::Cmyk => f.write_str("cmyk"),
            Self::Hsv => f.write_str("hsv"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

/// One color, viewed in every model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEditor {
    source: ColorModel,
    rgb: Rgb,
    cmyk: Cmyk,
    hsv: Hsv,
    hex: String,
}

impl Default for ColorEditor {
    fn default() -> Self {
        Self::from_rgb(Rgb::WHITE)
    }
}

impl ColorEditor {
    /// Starts at white.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts at `rgb`, with every model derived from it.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            source: ColorModel::Rgb,
            rgb,
            cmyk: rgb_to_cmyk(rgb),
            hsv: rgb_to_hsv(rgb),
            hex: rgb_to_hex(rgb),
        }
    }

    /// Current RGB.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Current CMYK.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// Current HSV.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Current `#rrggbb`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Model of the most recent edit.
    pub fn source(&self) -> ColorModel {
        self.source
    }

    /// Edits RGB. Components are clamped to `0..=255`.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        let rgb = Rgb::new(clamp(r, 255) as u8, clamp(g, 255) as u8, clamp(b, 255) as u8);
        self.rgb = rgb;
        self.cmyk = rgb_to_cmyk(rgb);
        self.hsv = rgb_to_hsv(rgb);
        self.finish(ColorModel::Rgb);
    }

    /// Edits CMYK. Components are clamped to `0..=100`.
    pub fn set_cmyk(&mut self, c: i32, m: i32, y: i32, k: i32) {
        let cmyk = Cmyk::new(
            clamp(c, 100) as u8,
            clamp(m, 100) as u8,
            clamp(y, 100) as u8,
            clamp(k, 100) as u8,
        );
        self.cmyk = cmyk;
        self.rgb = cmyk_to_rgb(cmyk);
        self.hsv = rgb_to_hsv(self.rgb);
        self.finish(ColorModel::Cmyk);
    }

    /// Edits HSV. Hue is clamped to `0..=360`, saturation and value to
    /// `0..=100`.
    pub fn set_hsv(&mut self, h: i32, s: i32, v: i32) {
        let hsv = Hsv::new(clamp(h, 360) as u16, clamp(s, 100) as u8, clamp(v, 100) as u8);
        self.hsv = hsv;
        self.rgb = hsv_to_rgb(hsv);
        self.cmyk = rgb_to_cmyk(self.rgb);
        self.finish(ColorModel::Hsv);
    }

    /// Edits via a hex string. Every model, the string included, is
    /// re-derived from the parsed RGB.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`](crate::ColorError::InvalidHex) for a
    /// malformed string; the editor is left unchanged.
    pub fn set_hex(&mut self, hex: &str) -> ColorResult<()> {
        let rgb = hex_to_rgb(hex)?;
        *self = Self::from_rgb(rgb);
        self.source = ColorModel::Hex;
        debug!(hex = %self.hex, rgb = %self.rgb, "Color updated");
        Ok(())
    }

    fn finish(&mut self, source: ColorModel) {
        self.hex = rgb_to_hex(self.rgb);
        self.source = source;
        debug!(%source, rgb = %self.rgb, cmyk = %self.cmyk, hsv = %self.hsv, "Color updated");
    }
}

#[inline]
fn clamp(v: i32, max: i32) -> i32 {
    v.clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_white() {
        let e = ColorEditor::new();
        assert_eq!(e.rgb(), Rgb::WHITE);
        assert_eq!(e.cmyk(), Cmyk::new(0, 0, 0, 0));
        assert_eq!(e.hsv(), Hsv::new(0, 0, 100));
        assert_eq!(e.hex(), "#ffffff");
    }

    #[test]
    fn test_set_rgb_derives_all() {
        let mut e = ColorEditor::new();
        e.set_rgb(255, 0, 128);
        assert_eq!(e.source(), ColorModel::Rgb);
        assert_eq!(e.cmyk(), rgb_to_cmyk(Rgb::new(255, 0, 128)));
        assert_eq!(e.hsv(), Hsv::new(330, 100, 100));
        assert_eq!(e.hex(), "#ff0080");
    }

    #[test]
    fn test_set_rgb_clamps() {
        let mut e = ColorEditor::new();
        e.set_rgb(300, -4, 17);
        assert_eq!(e.rgb(), Rgb::new(255, 0, 17));
    }

    #[test]
    fn test_set_cmyk_keeps_entered_values() {
        // CMYK(10, 20, 30, 40) -> RGB(138, 122, 107), which converts back
        // to CMYK(0, 12, 22, 46); the entered values must survive.
        let mut e = ColorEditor::new();
        e.set_cmyk(10, 20, 30, 40);
        assert_eq!(e.cmyk(), Cmyk::new(10, 20, 30, 40));
        assert_eq!(e.rgb(), Rgb::new(138, 122, 107));
        assert_ne!(rgb_to_cmyk(e.rgb()), e.cmyk());
        assert_eq!(e.hsv(), rgb_to_hsv(e.rgb()));
        assert_eq!(e.hex(), "#8a7a6b");
    }

    #[test]
    fn test_set_cmyk_clamps() {
        let mut e = ColorEditor::new();
        e.set_cmyk(150, -10, 0, 0);
        assert_eq!(e.cmyk(), Cmyk::new(100, 0, 0, 0));
        assert_eq!(e.rgb(), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_set_hsv_keeps_hue_360() {
        let mut e = ColorEditor::new();
        e.set_hsv(400, 100, 100);
        assert_eq!(e.hsv(), Hsv::new(360, 100, 100));
        assert_eq!(e.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(e.cmyk(), Cmyk::new(0, 100, 100, 0));
        assert_eq!(e.source(), ColorModel::Hsv);
    }

    #[test]
    fn test_set_hex() {
        let mut e = ColorEditor::new();
        e.set_hex("00FF00").unwrap();
        assert_eq!(e.source(), ColorModel::Hex);
        assert_eq!(e.hex(), "#00ff00");
        assert_eq!(e.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(e.hsv(), Hsv::new(120, 100, 100));
    }

    #[test]
    fn test_set_hex_error_leaves_state() {
        let mut e = ColorEditor::new();
        e.set_rgb(1, 2, 3);
        let before = e.clone();
        assert!(e.set_hex("#12345").is_err());
        assert_eq!(e, before);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let e = ColorEditor::from_rgb(Rgb::new(255, 128, 0));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["hex"], "#ff8000");
        assert_eq!(json["source"], "rgb");
        assert_eq!(json["cmyk"]["m"], 50);
    }
}
