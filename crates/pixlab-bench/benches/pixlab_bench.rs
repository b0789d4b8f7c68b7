//! Benchmarks for pixlab operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use pixlab_color::{Rgb, rgb_to_cmyk, rgb_to_hsv};
use pixlab_core::PixelBuffer;
use pixlab_ops::element::{ElementShape, StructuringElement};
use pixlab_ops::gray::to_grayscale;
use pixlab_ops::pixelwise::{PixelwiseParams, apply_pixelwise};
use pixlab_ops::stretch::linear_contrast_stretch;
use pixlab_ops::{morphology, parallel};
use pixlab_raster::{bresenham_circle, bresenham_line, dda, stepwise};

fn test_image(size: u32) -> PixelBuffer {
    PixelBuffer::from_fn(size, size, |x, y| {
        [(x * 7 + y) as u8, (x ^ y) as u8, (y * 3) as u8, 255]
    })
    .unwrap()
}

/// Benchmark grayscale conversion.
fn bench_gray(c: &mut Criterion) {
    let mut group = c.benchmark_group("gray");

    for size in [256u32, 1024] {
        let img = test_image(size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("to_grayscale", size), &img, |b, img| {
            b.iter(|| to_grayscale(black_box(img)))
        });
    }

    group.finish();
}

/// Benchmark erosion, sequential vs parallel, across element sizes.
fn bench_morphology(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology");

    let gray = to_grayscale(&test_image(512));
    group.throughput(Throughput::Elements(512 * 512));

    for size in [3usize, 7, 15] {
        for shape in [ElementShape::Rectangle, ElementShape::Cross] {
            let se = StructuringElement::new(shape, size).unwrap();
            let id = format!("{}_{}", shape, size);

            group.bench_with_input(BenchmarkId::new("erode", &id), &se, |b, se| {
                b.iter(|| morphology::erode(black_box(&gray), se).unwrap())
            });
            group.bench_with_input(BenchmarkId::new("erode_par", &id), &se, |b, se| {
                b.iter(|| parallel::erode(black_box(&gray), se).unwrap())
            });
        }
    }

    group.finish();
}

/// Benchmark brightness/contrast/invert and the contrast stretch.
fn bench_pixelwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixelwise");

    let img = test_image(1024);
    let params = PixelwiseParams { brightness: 12, contrast: 0.35, invert: true };
    group.throughput(Throughput::Elements(1024 * 1024));

    group.bench_function("apply", |b| b.iter(|| apply_pixelwise(black_box(&img), &params)));
    group.bench_function("apply_par", |b| {
        b.iter(|| parallel::apply_pixelwise(black_box(&img), &params).unwrap())
    });
    group.bench_function("stretch", |b| b.iter(|| linear_contrast_stretch(black_box(&img))));

    group.finish();
}

/// Benchmark the four rasterizers on growing shapes.
fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    for len in [100i32, 1000, 10000] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("stepwise", len), &len, |b, &l| {
            b.iter(|| stepwise(0, 0, black_box(l), l / 3))
        });
        group.bench_with_input(BenchmarkId::new("dda", len), &len, |b, &l| {
            b.iter(|| dda(0, 0, black_box(l), l / 3))
        });
        group.bench_with_input(BenchmarkId::new("bresenham", len), &len, |b, &l| {
            b.iter(|| bresenham_line(0, 0, black_box(l), l / 3))
        });
        group.bench_with_input(BenchmarkId::new("circle", len), &len, |b, &l| {
            b.iter(|| bresenham_circle(0, 0, black_box(l as u32)))
        });
    }

    group.finish();
}

/// Benchmark color model conversions.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    let colors: Vec<Rgb> = (0..4096u32)
        .map(|i| Rgb::new((i * 13) as u8, (i * 7) as u8, (i >> 4) as u8))
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_hsv", |b| {
        b.iter(|| colors.iter().map(|&c| rgb_to_hsv(black_box(c))).collect::<Vec<_>>())
    });
    group.bench_function("rgb_to_cmyk", |b| {
        b.iter(|| colors.iter().map(|&c| rgb_to_cmyk(black_box(c))).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gray,
    bench_morphology,
    bench_pixelwise,
    bench_raster,
    bench_color
);
criterion_main!(benches);
