//! Color command
//!
//! Converts one color given in any model into all the others.

use crate::ColorArgs;
use anyhow::{Result, bail};
use pixlab_color::{ColorEditor, parse_components};
use tracing::{info, trace};

pub fn run(args: ColorArgs, verbose: bool) -> Result<()> {
    trace!(json = args.json, "color::run");

    let input = &args.input;
    let mut editor = ColorEditor::new();
    if let Some(rgb) = &input.rgb {
        let [r, g, b] = parse_components::<3>("rgb", rgb)?;
        editor.set_rgb(r, g, b);
    } else if let Some(cmyk) = &input.cmyk {
        let [c, m, y, k] = parse_components::<4>("cmyk", cmyk)?;
        editor.set_cmyk(c, m, y, k);
    } else if let Some(hsv) = &input.hsv {
        let [h, s, v] = parse_components::<3>("hsv", hsv)?;
        editor.set_hsv(h, s, v);
    } else if let Some(hex) = &input.hex {
        editor.set_hex(hex)?;
    } else {
        bail!("one of --rgb, --cmyk, --hsv or --hex is required");
    }
    info!(source = %editor.source(), hex = editor.hex(), "Converted color");

    if args.json {
        return super::print_json(&editor);
    }

    if verbose {
        println!("source: {}", editor.source());
    }
    println!("rgb:  {}", editor.rgb());
    println!("cmyk: {}", editor.cmyk());
    println!("hsv:  {}", editor.hsv());
    println!("hex:  {}", editor.hex());
    Ok(())
}
