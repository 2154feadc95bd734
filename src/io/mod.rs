// Purpose - host-facing glue: sample clocks and buffer layout

use crate::error::ConfigError;

/// Turns a running sample counter into elapsed host seconds.
///
/// Time is derived from the integer counter on every call, so long runs
/// don't accumulate rounding error.
#[derive(Debug, Clone)]
pub struct SampleClock {
    sample_rate: f64,
    position: u64,
}

impl SampleClock {
    pub fn new(sample_rate: f64) -> Result<Self, ConfigError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            sample_rate,
            position: 0,
        })
    }

    /// Elapsed seconds at the current sample, then advance by one.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        let now = self.seconds();
        self.position += 1;
        now
    }

    pub fn seconds(&self) -> f64 {
        self.position as f64 / self.sample_rate
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn seek(&mut self, position: u64) {
        self.position = position;
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Copy a mono block onto every channel of an interleaved buffer.
///
/// Writes `min(mono.len(), out.len() / channels)` frames and returns that
/// count.
pub fn interleave_mono(mono: &[f32], out: &mut [f32], channels: usize) -> usize {
    if channels == 0 {
        return 0;
    }
    let mut frames = 0;
    for (frame, &sample) in out.chunks_exact_mut(channels).zip(mono) {
        frame.fill(sample);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_counts_seconds() {
        let mut clock = SampleClock::new(4.0).unwrap();
        assert_eq!(clock.advance(), 0.0);
        assert_eq!(clock.advance(), 0.25);
        assert_eq!(clock.advance(), 0.5);
        assert_eq!(clock.position(), 3);

        clock.seek(44);
        assert_eq!(clock.seconds(), 11.0);
        clock.reset();
        assert_eq!(clock.seconds(), 0.0);
    }

    #[test]
    fn test_clock_rejects_zero_rate() {
        assert!(SampleClock::new(0.0).is_err());
    }

    #[test]
    fn test_interleave_duplicates_to_all_channels() {
        let mono = [0.1, 0.2, 0.3];
        let mut out = [0.0f32; 6];
        assert_eq!(interleave_mono(&mono, &mut out, 2), 3);
        assert_eq!(out, [0.1, 0.1, 0.2, 0.2, 0.3, 0.3]);
    }

    #[test]
    fn test_interleave_stops_at_shorter_side() {
        let mono = [0.5; 8];
        let mut out = [0.0f32; 7];
        // only two whole 3-channel frames fit
        assert_eq!(interleave_mono(&mono, &mut out, 3), 2);
        assert_eq!(out[6], 0.0);
        assert_eq!(interleave_mono(&mono, &mut out, 0), 0);
    }
}
