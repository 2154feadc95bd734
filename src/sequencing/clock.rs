use std::f64::consts::TAU;

use crate::error::ConfigError;

/// Tempo at which one host second equals one beat.
const REFERENCE_BPM: f64 = 120.0;

/// Position in the piece, derived from host time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BeatTime {
    /// Tempo-scaled beat time.
    pub t: f64,
    /// `t` as radians (`2π·t`).
    pub tt: f64,
}

/// Maps host time to beat time.
///
/// Every call recomputes from the raw value, nothing is accumulated, so
/// there is no drift however long the piece runs.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    bpm: f64,
    scale: f64,
}

impl Clock {
    pub fn new(bpm: f64) -> Result<Self, ConfigError> {
        if !(bpm.is_finite() && bpm > 0.0) {
            return Err(ConfigError::InvalidTempo(bpm));
        }
        Ok(Self {
            bpm,
            scale: bpm / REFERENCE_BPM,
        })
    }

    #[inline]
    pub fn tick(&self, raw: f64) -> BeatTime {
        let t = raw * self.scale;
        BeatTime { t, tt: TAU * t }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Host time at which beat time reaches `t`.
    pub fn raw_time(&self, t: f64) -> f64 {
        t / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_by_tempo() {
        let clock = Clock::new(130.0).unwrap();
        let now = clock.tick(12.0);
        assert!((now.t - 13.0).abs() < 1e-12);
        assert!((now.tt - TAU * 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_tempo_is_identity() {
        let clock = Clock::new(120.0).unwrap();
        assert_eq!(clock.tick(3.5).t, 3.5);
    }

    #[test]
    fn test_raw_time_inverts_tick() {
        let clock = Clock::new(130.0).unwrap();
        let raw = clock.raw_time(7.4);
        assert!((clock.tick(raw).t - 7.4).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_tempo() {
        assert!(Clock::new(0.0).is_err());
        assert!(Clock::new(f64::INFINITY).is_err());
    }
}
