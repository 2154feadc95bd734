//! Benchmarks for saturation and output clipping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wobble_dsp::dsp::distortion;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input: Vec<f64> = (0..size).map(|i| (i as f64 * 0.1).sin() * 1.5).collect();
        let mut output = vec![0.0f64; size];

        // Per-sample soft clip at the heavy bass drive
        group.bench_with_input(BenchmarkId::new("soft_clip", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in output.iter_mut().zip(&input) {
                    *out = distortion::soft_clip(black_box(x), black_box(10.0));
                }
            })
        });

        // Output stage guard
        let input32: Vec<f32> = input.iter().map(|&x| x as f32).collect();
        let mut buffer = input32.clone();
        group.bench_with_input(BenchmarkId::new("hard_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input32);
                distortion::hard_clip_buffer(black_box(&mut buffer), black_box(1.0));
            })
        });
    }

    group.finish();
}
