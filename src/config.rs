//! Synth-wide constants, gathered into one immutable structure.
//!
//! Tempo, tuning and sample rate are fixed for the lifetime of a
//! [`Renderer`](crate::synth::Renderer). They are handed to the clock, the
//! note mapper and every oscillator at construction time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default host sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;

/// Table size used by every oscillator the renderer owns.
pub const DEFAULT_TABLE_SIZE: usize = 512;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Host sample rate in Hz.
    pub sample_rate: f64,
    /// Tempo. Beat time advances at `bpm / 120` beats per host second.
    pub bpm: f64,
    /// Reference pitch in Hz.
    pub tuning: f64,
    /// Global transpose in semitones, added to every scale degree.
    pub transpose: f64,
    /// Length of one arrangement bar, in beats.
    pub bar_length: f64,
    /// Wavetable length for the renderer's oscillators.
    pub table_size: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bpm: 130.0,
            tuning: 440.0,
            transpose: 11.0,
            bar_length: 7.4,
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl SynthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn with_tuning(mut self, tuning: f64) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_transpose(mut self, transpose: f64) -> Self {
        self.transpose = transpose;
        self
    }

    pub fn with_bar_length(mut self, bar_length: f64) -> Self {
        self.bar_length = bar_length;
        self
    }

    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Check every field, reporting the first one that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(value: f64) -> bool {
            value.is_finite() && value > 0.0
        }

        if !positive(self.sample_rate) {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if !positive(self.bpm) {
            return Err(ConfigError::InvalidTempo(self.bpm));
        }
        if !positive(self.tuning) {
            return Err(ConfigError::InvalidTuning(self.tuning));
        }
        if !positive(self.bar_length) {
            return Err(ConfigError::InvalidBarLength(self.bar_length));
        }
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SynthConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = SynthConfig::new()
            .with_bpm(120.0)
            .with_sample_rate(48_000.0)
            .with_table_size(1024);

        assert_eq!(config.bpm, 120.0);
        assert_eq!(config.sample_rate, 48_000.0);
        assert_eq!(config.table_size, 1024);
        assert_eq!(config.tuning, 440.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SynthConfig::default();

        assert_eq!(
            base.with_sample_rate(0.0).validate(),
            Err(ConfigError::InvalidSampleRate(0.0))
        );
        assert_eq!(
            base.with_bpm(-10.0).validate(),
            Err(ConfigError::InvalidTempo(-10.0))
        );
        assert!(matches!(
            base.with_tuning(f64::NAN).validate(),
            Err(ConfigError::InvalidTuning(_))
        ));
        assert_eq!(
            base.with_bar_length(0.0).validate(),
            Err(ConfigError::InvalidBarLength(0.0))
        );
        assert_eq!(
            base.with_table_size(0).validate(),
            Err(ConfigError::ZeroTableSize)
        );
    }
}
