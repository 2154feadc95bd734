//! Construction-time errors.
//!
//! Everything that can go wrong is caught while building oscillators,
//! filters or a [`Renderer`](crate::synth::Renderer). The per-sample render
//! path has no error conditions.

use thiserror::Error;

/// Misconfiguration detected before any audio is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A wavetable needs at least one sample.
    #[error("wavetable size must be greater than zero")]
    ZeroTableSize,

    #[error("sample rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),

    #[error("tempo must be a positive finite number of beats per minute, got {0}")]
    InvalidTempo(f64),

    /// Reference pitch for `note()` (A4 in Hz).
    #[error("tuning reference must be a positive finite frequency, got {0}")]
    InvalidTuning(f64),

    #[error("bar length must be a positive finite number of beats, got {0}")]
    InvalidBarLength(f64),

    #[error("unknown waveform `{0}` (expected sin, saw, ramp, tri or sqr)")]
    UnknownWaveform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ConfigError::InvalidSampleRate(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = ConfigError::UnknownWaveform("pulse".into());
        assert!(err.to_string().contains("pulse"));
    }
}
