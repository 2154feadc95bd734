//! Benchmarks for the full renderer.
//!
//! Sections differ in cost only through which branches of the arrangement
//! they take, every layer is computed every sample.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wobble_dsp::io::SampleClock;
use wobble_dsp::synth::Section;
use wobble_dsp::{Renderer, SynthConfig};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");
    let config = SynthConfig::default().with_sample_rate(SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for section in [Section::Intro, Section::Groove, Section::Duet] {
            let mut renderer = Renderer::new(config).expect("valid config");
            let start = renderer
                .clock()
                .raw_time(renderer.arrangement().section_start(section) + 1.0);
            let mut clock = SampleClock::new(SAMPLE_RATE).expect("valid rate");
            let origin = (start * SAMPLE_RATE) as u64;

            group.bench_with_input(BenchmarkId::new(section.name(), size), &size, |b, _| {
                b.iter(|| {
                    clock.seek(origin);
                    renderer.render_block(&mut clock, black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
