//! Benchmarks for the diode ladder.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wobble_dsp::dsp::DiodeLadderFilter;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 2.0 - 1.0)
            .collect();
        let mut output = vec![0.0f64; size];

        // Fixed cutoff, no resonance
        let mut filter = DiodeLadderFilter::new();
        group.bench_with_input(BenchmarkId::new("static", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in output.iter_mut().zip(&input) {
                    *out = filter.run(black_box(x));
                }
            })
        });

        // Bass setting with the cutoff moved every sample
        let mut filter = DiodeLadderFilter::new();
        filter.set_resonance(0.23);
        filter.set_highpass_cutoff(0.0011);
        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, _| {
            b.iter(|| {
                for (i, (out, &x)) in output.iter_mut().zip(&input).enumerate() {
                    filter.set_cutoff(0.48 + 0.04 * i as f64 / size as f64);
                    *out = filter.run(black_box(x * 2.0));
                }
            })
        });
    }

    group.finish();
}
