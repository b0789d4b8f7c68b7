//! `#rrggbb` strings and comma-separated component lists.

use crate::model::Rgb;
use crate::{ColorError, ColorResult};

/// Formats as lowercase `#rrggbb`.
///
/// ```rust
/// use pixlab_color::{Rgb, rgb_to_hex};
///
/// assert_eq!(rgb_to_hex(Rgb::new(255, 128, 9)), "#ff8009");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Parses `#rrggbb` or `rrggbb`, case-insensitive.
///
/// # Errors
///
/// [`ColorError::InvalidHex`] unless the input is exactly six hex digits
/// after an optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Parses `N` comma-separated integers such as `"255, 128, 0"`.
///
/// Values are not range-checked here; the editor clamps them.
pub fn parse_components<const N: usize>(model: &'static str, input: &str) -> ColorResult<[i32; N]> {
    let invalid = |reason: String| ColorError::InvalidComponents {
        model,
        input: input.to_string(),
        reason,
    };

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(invalid(format!("expected {} values, got {}", N, parts.len())));
    }

    let mut out = [0i32; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| invalid(format!("'{}' is not an integer", part)))?;
    }
    Ok(out)
}
