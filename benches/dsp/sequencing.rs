//! Benchmarks for the per-sample sequencing math.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wobble_dsp::sequencing::{arp, slide, Tuning};
use wobble_dsp::synth::{patterns, Arrangement};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_sequencing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/sequencing");
    let tuning = Tuning::new(440.0, 11.0).expect("valid tuning");
    let melody = patterns::melody(&tuning);
    let arrangement = Arrangement::new(7.4).expect("valid bar");

    for &size in BLOCK_SIZES {
        let times: Vec<f64> = (0..size).map(|i| 30.0 + i as f64 / SAMPLE_RATE).collect();

        // Melody glide, the powf dominates
        group.bench_with_input(BenchmarkId::new("slide", size), &size, |b, _| {
            b.iter(|| {
                times
                    .iter()
                    .map(|&t| slide(black_box(t), 0.25, &melody, 32.0))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("arp", size), &size, |b, _| {
            b.iter(|| {
                times
                    .iter()
                    .map(|&t| arp(black_box(t), 0.5, 50.0, 40.0, 0.0))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("levels", size), &size, |b, _| {
            b.iter(|| {
                times
                    .iter()
                    .map(|&t| arrangement.levels(black_box(t)).bass)
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}
