//! CLI command implementations

pub mod adjust;
pub mod color;
pub mod compare;
pub mod gray;
pub mod morph;
pub mod raster;

use anyhow::{Context, Result, bail};
use pixlab_core::{Circle, LineSegment, PixelBuffer, raw};
use std::path::Path;

use crate::{CircleArgs, LineArgs};

/// Load an image: PNG by extension, headerless RGBA8 otherwise.
///
/// Raw files need both dimensions; for PNG they are optional and, when
/// given, must match the file.
pub fn load_image(path: &Path, width: Option<u32>, height: Option<u32>) -> Result<PixelBuffer> {
    if is_png(path) {
        let image = read_png(path)?;
        for (flag, given, actual) in [("--width", width, image.width()), ("--height", height, image.height())] {
            if let Some(v) = given.filter(|&v| v != actual) {
                bail!("{} {} does not match {} ({}x{})", flag, v, path.display(), image.width(), image.height());
            }
        }
        return Ok(image);
    }

    let (Some(width), Some(height)) = (width, height) else {
        bail!("Raw RGBA8 input {} needs --width and --height", path.display());
    };
    raw::read_raw(path, width, height)
        .with_context(|| format!("Failed to load {}x{} RGBA8 image: {}", width, height, path.display()))
}

/// Save an image: PNG by extension, headerless RGBA8 otherwise.
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    if is_png(path) {
        return write_png(path, image);
    }
    raw::write_raw(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

#[cfg(feature = "png")]
fn read_png(path: &Path) -> Result<PixelBuffer> {
    crate::png_io::read(path).with_context(|| format!("Failed to load PNG: {}", path.display()))
}

#[cfg(not(feature = "png"))]
fn read_png(path: &Path) -> Result<PixelBuffer> {
    bail!("{}: PNG support is disabled (build with the `png` feature)", path.display())
}

#[cfg(feature = "png")]
fn write_png(path: &Path, image: &PixelBuffer) -> Result<()> {
    crate::png_io::write(path, image).with_context(|| format!("Failed to save PNG: {}", path.display()))
}

#[cfg(not(feature = "png"))]
fn write_png(path: &Path, _image: &PixelBuffer) -> Result<()> {
    bail!("{}: PNG support is disabled (build with the `png` feature)", path.display())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

impl LineArgs {
    fn segment(&self) -> LineSegment {
        LineSegment::new(self.x1, self.y1, self.x2, self.y2)
    }
}

impl CircleArgs {
    fn circle(&self) -> Circle {
        Circle::new(self.cx, self.cy, self.radius)
    }
}
