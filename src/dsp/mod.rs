//! Low-level DSP primitives used by the renderer.
//!
//! These components are allocation-free and realtime-safe once built. They
//! stay focused on the signal-processing math; wiring and timing live in
//! [`crate::synth`].

/// Soft and hard saturation curves.
pub mod distortion;
/// Nonlinear four-pole diode ladder lowpass.
pub mod filter;
/// Closed-form modulation waveforms of beat time.
pub mod lfo;
/// Seeded white noise.
pub mod noise;
/// Wavetable oscillators with linear interpolation.
pub mod oscillator;

pub use distortion::clip;
pub use filter::DiodeLadderFilter;
pub use noise::Noise;
pub use oscillator::{Waveform, WavetableOscillator};
