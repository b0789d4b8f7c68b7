//! Compare command
//!
//! Times every rasterizer once and prints a table.

use crate::CompareArgs;
use anyhow::Result;
use pixlab_raster::{RasterAlgorithm, measure_all};
use serde::Serialize;
use tracing::{info, trace};

#[derive(Serialize)]
struct Row {
    algorithm: RasterAlgorithm,
    points: usize,
    elapsed_ms: f64,
}

pub fn run(args: CompareArgs, verbose: bool) -> Result<()> {
    let line = args.line.segment();
    let circle = args.circle.circle();
    trace!(?line, ?circle, "compare::run");

    let rows: Vec<Row> = measure_all(&line, &circle)
        .into_iter()
        .map(|m| Row {
            algorithm: m.algorithm,
            points: m.points,
            elapsed_ms: m.millis(),
        })
        .collect();
    info!(runs = rows.len(), "Measured rasterizers");

    if args.json {
        return super::print_json(&rows);
    }

    if verbose {
        println!("line {} -> {}, circle at {} r={}", line.start, line.end, circle.center, circle.radius);
    }
    println!("{:<10} {:>8} {:>12}", "algorithm", "points", "time (ms)");
    for row in &rows {
        println!("{:<10} {:>8} {:>12.4}", row.algorithm, row.points, row.elapsed_ms);
    }
    Ok(())
}
