//! Benchmarks for low-level DSP primitives.

mod distortion;
mod filter;
mod oscillator;
mod sequencing;

pub use distortion::bench_distortion;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
pub use sequencing::bench_sequencing;
