//! Benchmarks for wavetable playback.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wobble_dsp::dsp::{Noise, Waveform, WavetableOscillator};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Interpolated lookup, the renderer's default
        let mut osc = WavetableOscillator::with_size(Waveform::Triangle, 512, SAMPLE_RATE)
            .expect("valid table");
        group.bench_with_input(BenchmarkId::new("interpolated", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = osc.play(black_box(440.0));
                }
            })
        });

        // Stepped lookup, no blend
        let mut osc = WavetableOscillator::with_size(Waveform::Triangle, 512, SAMPLE_RATE)
            .expect("valid table")
            .with_interpolation(false);
        group.bench_with_input(BenchmarkId::new("stepped", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = osc.play(black_box(440.0));
                }
            })
        });

        // One-second table: same math, more cache pressure
        let mut osc = WavetableOscillator::new(Waveform::Sine, SAMPLE_RATE).expect("valid rate");
        group.bench_with_input(BenchmarkId::new("full_table", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = osc.play(black_box(55.0));
                }
            })
        });

        let mut noise = Noise::default();
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = noise.next_sample();
                }
            })
        });
    }

    group.finish();
}
