//! PNG load/save for the CLI.
//!
//! Any 8 or 16-bit PNG is decoded to RGBA8: palettes are expanded, 16-bit
//! samples are stripped to their high byte, gray is copied into R, G and B,
//! and a missing alpha channel becomes 255. Output is always 8-bit RGBA.

use anyhow::{Context, Result, bail};
use pixlab_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file into an RGBA8 buffer.
pub fn read(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder.read_info().context("Failed to decode PNG header")?;
    let buf_size = reader
        .output_buffer_size()
        .context("Cannot determine PNG output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf).context("Failed to decode PNG data")?;
    let samples = &buf[..info.buffer_size()];

    debug!(w = info.width, h = info.height, color = ?info.color_type, "Decoded PNG");

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => samples.to_vec(),
        png::ColorType::Rgb => samples
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => samples.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        other => bail!("Unsupported PNG color type after expansion: {:?}", other),
    };

    Ok(PixelBuffer::from_rgba(info.width, info.height, rgba)?)
}

/// Writes an RGBA8 buffer as an 8-bit RGBA PNG.
pub fn write(path: &Path, image: &PixelBuffer) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut writer = encoder.write_header().context("Failed to write PNG header")?;
    writer
        .write_image_data(image.data())
        .context("Failed to write PNG data")?;
    writer.finish().context("Failed to finish PNG")?;
    Ok(())
}
