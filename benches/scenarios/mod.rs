//! Whole-piece benchmarks.

mod render;

pub use render::bench_render;
