//! pixlab - pixel processing sandbox CLI
//!
//! Grayscale, morphology, pixelwise adjustments and contrast stretch on raw
//! RGBA8 files, plus rasterizer comparison and color model conversion.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pixlab_ops::{ElementShape, MorphOp};
use pixlab_raster::RasterAlgorithm;

mod commands;
#[cfg(feature = "png")]
mod png_io;

#[derive(Parser)]
#[command(name = "pixlab")]
#[command(author, version, about = "Pixel processing sandbox")]
#[command(long_about = "
Pixel transforms on PNG or raw RGBA8 files, rasterizer comparison and
color model conversion.

Files ending in .png are decoded and encoded as PNG. Anything else is
headerless interleaved RGBA8 samples; pass the dimensions with -W/-H.

Examples:
  pixlab gray in.png -o gray.png
  pixlab gray in.rgba -W 640 -H 480 -o gray.rgba
  pixlab morph in.rgba -W 640 -H 480 -o out.rgba --op dilation --element cross --size 5
  pixlab pixelwise in.rgba -W 640 -H 480 -o out.rgba --brightness 20 --contrast 35
  pixlab contrast in.rgba -W 640 -H 480 -o out.rgba --invert
  pixlab raster --algorithm bresenham --x1 -10 --y1 -4 --x2 12 --y2 7 --plot
  pixlab raster --algorithm circle --radius 9 --json
  pixlab compare --x2 300 --y2 120 --radius 200
  pixlab color --hex '#ff8000'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert to grayscale (BT.601 luma)
    #[command(visible_alias = "g")]
    Gray(GrayArgs),

    /// Grayscale erosion or dilation
    #[command(visible_alias = "m")]
    Morph(MorphArgs),

    /// Brightness, contrast and invert
    #[command(visible_alias = "p")]
    Pixelwise(AdjustArgs),

    /// Pixelwise adjustments followed by linear contrast stretch
    Contrast(AdjustArgs),

    /// Rasterize a line or circle with one algorithm
    #[command(visible_alias = "r")]
    Raster(RasterArgs),

    /// Time all four rasterizers side by side
    Compare(CompareArgs),

    /// Convert a color between RGB, CMYK, HSV and hex
    Color(ColorArgs),
}

#[derive(Args)]
struct ImageArgs {
    /// Input image (.png, or raw RGBA8)
    input: PathBuf,

    /// Output image (.png, or raw RGBA8)
    #[arg(short, long)]
    output: PathBuf,

    /// Image width in pixels (required for raw input)
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Image height in pixels (required for raw input)
    #[arg(short = 'H', long)]
    height: Option<u32>,
}

#[derive(Args)]
struct GrayArgs {
    #[command(flatten)]
    image: ImageArgs,
}

#[derive(Args)]
struct MorphArgs {
    #[command(flatten)]
    image: ImageArgs,

    /// Operation: erosion, dilation
    #[arg(long, default_value = "erosion")]
    op: MorphOp,

    /// Structuring element: rect, cross
    #[arg(short, long, default_value = "rect")]
    element: ElementShape,

    /// Structuring element size in pixels
    #[arg(short, long, default_value = "3")]
    size: usize,
}

#[derive(Args)]
struct AdjustArgs {
    #[command(flatten)]
    image: ImageArgs,

    /// Brightness delta added to every color sample
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    brightness: i32,

    /// Contrast in percent (-100..100, 0 = unchanged)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    contrast: f64,

    /// Invert colors after brightness and contrast
    #[arg(short, long)]
    invert: bool,
}

#[derive(Args)]
struct LineArgs {
    /// Line start x
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    x1: i32,

    /// Line start y
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    y1: i32,

    /// Line end x
    #[arg(long, default_value = "20", allow_negative_numbers = true)]
    x2: i32,

    /// Line end y
    #[arg(long, default_value = "8", allow_negative_numbers = true)]
    y2: i32,
}

#[derive(Args)]
struct CircleArgs {
    /// Circle center x
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    cx: i32,

    /// Circle center y
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    cy: i32,

    /// Circle radius
    #[arg(short, long, default_value = "10")]
    radius: u32,
}

#[derive(Args)]
struct RasterArgs {
    /// Algorithm: step, dda, bresenham, circle
    #[arg(short, long, default_value = "bresenham")]
    algorithm: RasterAlgorithm,

    #[command(flatten)]
    line: LineArgs,

    #[command(flatten)]
    circle: CircleArgs,

    /// Draw the points on a text grid instead of listing them
    #[arg(short, long)]
    plot: bool,

    /// Plot width in canvas pixels
    #[arg(long, default_value = "64")]
    cols: u32,

    /// Plot height in canvas pixels
    #[arg(long, default_value = "32")]
    rows: u32,

    /// Canvas pixels per world unit
    #[arg(long, default_value = "1.0")]
    scale: f64,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    line: LineArgs,

    #[command(flatten)]
    circle: CircleArgs,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ColorInput {
    /// RGB components, e.g. 255,128,0
    #[arg(long, allow_hyphen_values = true)]
    rgb: Option<String>,

    /// CMYK percentages, e.g. 0,50,100,0
    #[arg(long, allow_hyphen_values = true)]
    cmyk: Option<String>,

    /// HSV as degrees,percent,percent, e.g. 30,100,100
    #[arg(long, allow_hyphen_values = true)]
    hsv: Option<String>,

    /// Hex color, e.g. '#ff8000'
    #[arg(long)]
    hex: Option<String>,
}

#[derive(Args)]
struct ColorArgs {
    #[command(flatten)]
    input: ColorInput,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Gray(args) => commands::gray::run(args, cli.verbose),
        Commands::Morph(args) => commands::morph::run(args, cli.verbose),
        Commands::Pixelwise(args) => commands::adjust::run(args, false, cli.verbose),
        Commands::Contrast(args) => commands::adjust::run(args, true, cli.verbose),
        Commands::Raster(args) => commands::raster::run(args, cli.verbose),
        Commands::Compare(args) => commands::compare::run(args, cli.verbose),
        Commands::Color(args) => commands::color::run(args, cli.verbose),
    }
}
