//! Raster command
//!
//! Runs one rasterizer on a line or circle and prints the visited points,
//! a text plot, or JSON.

use crate::RasterArgs;
use anyhow::Result;
use pixlab_core::Point2D;
use pixlab_raster::{RasterAlgorithm, Shape, Viewport, timed};
use serde::Serialize;
use tracing::{debug, info, trace};

#[derive(Serialize)]
struct RasterReport<'a> {
    algorithm: RasterAlgorithm,
    shape: Shape,
    elapsed_ms: f64,
    count: usize,
    points: &'a [Point2D],
}

pub fn run(args: RasterArgs, verbose: bool) -> Result<()> {
    trace!(algorithm = %args.algorithm, plot = args.plot, json = args.json, "raster::run");

    let shape = if args.algorithm.is_line() {
        Shape::Line(args.line.segment())
    } else {
        Shape::Circle(args.circle.circle())
    };
    debug!(?shape, "Shape");

    let run = timed(|| args.algorithm.rasterize(&shape));
    let elapsed_ms = run.millis();
    let points = run.value?;
    info!(algorithm = %args.algorithm, points = points.len(), elapsed_ms, "Rasterized");

    if args.json {
        return super::print_json(&RasterReport {
            algorithm: args.algorithm,
            shape,
            elapsed_ms,
            count: points.len(),
            points: &points,
        });
    }

    if args.plot {
        let viewport = Viewport::new(args.cols, args.rows, args.scale)?;
        println!("{}", viewport.plot(&points));
    } else {
        for p in &points {
            println!("{} {}", p.x, p.y);
        }
    }

    if verbose || args.plot {
        println!("{}: {} points in {:.4} ms", args.algorithm, points.len(), elapsed_ms);
    }
    Ok(())
}
