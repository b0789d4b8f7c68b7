//! Gray command
//!
//! Converts an image to grayscale, keeping alpha.

use crate::GrayArgs;
use anyhow::Result;
use pixlab_ops::gray::to_grayscale;
use tracing::{info, trace};

pub fn run(args: GrayArgs, verbose: bool) -> Result<()> {
    let image = &args.image;
    trace!(input = %image.input.display(), "gray::run");

    let src = super::load_image(&image.input, image.width, image.height)?;
    info!(w = src.width(), h = src.height(), "Converting to grayscale");

    let out = to_grayscale(&src);
    super::save_image(&image.output, &out)?;

    if verbose {
        println!("Wrote {}", image.output.display());
    }
    Ok(())
}
