//! Pixelwise and contrast commands
//!
//! Brightness, contrast and invert, optionally followed by a linear
//! contrast stretch. Contrast is taken in percent on the command line.

use crate::AdjustArgs;
use anyhow::Result;
use pixlab_ops::{Method, ProcessingParameters, process};
use tracing::{debug, info, trace};

pub fn run(args: AdjustArgs, stretch: bool, verbose: bool) -> Result<()> {
    let image = &args.image;
    trace!(input = %image.input.display(), brightness = args.brightness, contrast = args.contrast, invert = args.invert, stretch, "adjust::run");

    let params = ProcessingParameters {
        brightness: args.brightness,
        contrast: args.contrast / 100.0,
        invert: args.invert,
        ..Default::default()
    };
    params.pixelwise().validate()?;
    debug!(?params, "Parameters");

    let method = if stretch { Method::Contrast } else { Method::Pixelwise };
    let src = super::load_image(&image.input, image.width, image.height)?;

    info!(%method, w = src.width(), h = src.height(), "Adjusting pixels");
    let out = process(&src, method, &params)?;
    super::save_image(&image.output, &out)?;

    if verbose {
        println!("{} -> {}", method, image.output.display());
    }
    Ok(())
}
