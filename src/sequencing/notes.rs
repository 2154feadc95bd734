/*
Scale Degrees to Frequency
==========================

Pitches are written as a degree (semitones) plus an octave, then shifted by
a global transpose and tuned against a reference pitch:

    freq = tuning · 2^((degree + transpose - 33 + 12·octave) / 12)

The -33 anchors degree 0 / octave 0 / transpose 0 at 33 semitones below
the reference (A4 = 440 Hz → C2 ≈ 65.4 Hz). The default transpose of 11
moves degree 0 up to B.

Example, defaults (tuning 440, transpose 11):
  note(2, 2)  = 440 · 2^((2 + 11 - 33 + 24)/12) = 440 · 2^(4/12) ≈ 554.4 Hz
  note(16, 6) = 440 · 2^(66/12)                ≈ 19912 Hz (hat partial)
*/

use crate::config::SynthConfig;
use crate::error::ConfigError;

/// Semitone offset between degree 0 (octave 0) and the reference pitch.
const REFERENCE_OFFSET: f64 = 33.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Reference pitch in Hz.
    pub tuning: f64,
    /// Semitones added to every degree.
    pub transpose: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tuning: 440.0,
            transpose: 11.0,
        }
    }
}

impl Tuning {
    pub fn new(tuning: f64, transpose: f64) -> Result<Self, ConfigError> {
        if !(tuning.is_finite() && tuning > 0.0) {
            return Err(ConfigError::InvalidTuning(tuning));
        }
        Ok(Self { tuning, transpose })
    }

    pub fn from_config(config: &SynthConfig) -> Result<Self, ConfigError> {
        Self::new(config.tuning, config.transpose)
    }

    /// Frequency in Hz of `degree` in `octave`.
    pub fn note(&self, degree: f64, octave: f64) -> f64 {
        let semitones = degree + self.transpose - REFERENCE_OFFSET + 12.0 * octave;
        2.0_f64.powf(semitones / 12.0) * self.tuning
    }

    /// Map a list of degrees onto one octave.
    pub fn notes<const N: usize>(&self, degrees: [f64; N], octave: f64) -> [f64; N] {
        degrees.map(|degree| self.note(degree, octave))
    }
}

/// Scale a frequency by `factor` (2 = one octave up, 1/8 = three down).
#[inline]
pub fn octave(freq: f64, factor: f64) -> f64 {
    freq * factor
}
