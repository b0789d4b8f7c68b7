//! Morph command
//!
//! Grayscale erosion or dilation with a rectangle or cross element.

use crate::MorphArgs;
use anyhow::Result;
use pixlab_ops::{Method, ProcessingParameters, process};
use tracing::{info, trace};

pub fn run(args: MorphArgs, verbose: bool) -> Result<()> {
    let image = &args.image;
    trace!(input = %image.input.display(), op = %args.op, element = %args.element, size = args.size, "morph::run");

    let src = super::load_image(&image.input, image.width, image.height)?;
    let params = ProcessingParameters {
        op: args.op,
        shape: args.element,
        size: args.size,
        ..Default::default()
    };

    info!(op = %args.op, element = %args.element, size = args.size, w = src.width(), h = src.height(), "Applying morphology");
    let out = process(&src, Method::Morphology, &params)?;
    super::save_image(&image.output, &out)?;

    if verbose {
        println!("{} {}x{} -> {}", args.op, args.size, args.size, image.output.display());
    }
    Ok(())
}
