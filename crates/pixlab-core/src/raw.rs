//! Headerless RGBA8 sample files.
//!
//! A raw file is nothing but `width * height * 4` interleaved samples; the
//! dimensions travel out of band. This is what `magick in.png rgba:out.rgba`
//! produces.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Reads all remaining samples from `reader` into a buffer.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) if reading fails,
/// [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) if the
/// sample count does not match `width x height`.
pub fn read_rgba<R: Read>(mut reader: R, width: u32, height: u32) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    PixelBuffer::from_rgba(width, height, data)
}

/// Writes the buffer's samples to `writer`.
pub fn write_rgba<W: Write>(mut writer: W, buf: &PixelBuffer) -> Result<()> {
    writer.write_all(buf.data())?;
    writer.flush()?;
    Ok(())
}

/// Loads a raw RGBA8 file.
pub fn read_raw(path: impl AsRef<Path>, width: u32, height: u32) -> Result<PixelBuffer> {
    let data = fs::read(path)?;
    PixelBuffer::from_rgba(width, height, data)
}

/// Saves a buffer as a raw RGBA8 file, replacing any existing file.
pub fn write_raw(path: impl AsRef<Path>, buf: &PixelBuffer) -> Result<()> {
    fs::write(path, buf.data())?;
    Ok(())
}
