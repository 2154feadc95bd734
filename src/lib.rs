pub mod config;
pub mod dsp; // Oscillators, filter, saturation, noise
pub mod error;
pub mod io;
pub mod sequencing; // Beat clock, step sequencing, envelopes
pub mod synth; // The renderer and its arrangement

pub use config::SynthConfig;
pub use error::ConfigError;
pub use synth::Renderer;

pub const MAX_BLOCK_SIZE: usize = 2048;
