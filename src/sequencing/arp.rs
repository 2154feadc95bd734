//! Pluck envelope.
//!
//! Not an arpeggiator: `arp` is a retriggering double exponential. Inside
//! each cycle the argument of the sine decays (a downward chirp when `x` is
//! large, a fading DC-ish offset when `x` is a signal) while the amplitude
//! decays on its own rate.
//!
//! ```text
//!   ts  = (t / 2) mod measure
//!   out = sin(x · e^(-ts·y)) · e^(-ts·z)
//! ```
//!
//! | use         | measure | x            | y    | z  |
//! | ----------- | ------- | ------------ | ---- | -- |
//! | kick        | 1/2     | 50           | 40   | 0  |
//! | lead pluck  | 1/16    | oscillator   | 1000 | 1  |
//! | hat         | 1/16    | osc + noise  | 2    | 70 |

/// Time since the last retrigger, in half-beats.
#[inline]
pub fn envelope_time(t: f64, measure: f64) -> f64 {
    (t / 2.0) % measure
}

#[inline]
pub fn arp(t: f64, measure: f64, x: f64, y: f64, z: f64) -> f64 {
    let ts = envelope_time(t, measure);
    (x * (-ts * y).exp()).sin() * (-ts * z).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retriggers_every_measure() {
        let measure = 0.5;
        // period in t is 2 × measure
        for i in 0..20 {
            let t = 0.013 + i as f64 * 0.047;
            let a = arp(t, measure, 50.0, 40.0, 3.0);
            let b = arp(t + 2.0 * measure, measure, 50.0, 40.0, 3.0);
            assert!((a - b).abs() < 1e-9, "not periodic at t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn test_amplitude_envelope_decays_within_cycle() {
        let measure = 0.25;
        let (x, y, z) = (0.8, 2.0, 5.0);
        let mut prev = f64::INFINITY;
        for i in 0..100 {
            let t = 2.0 * measure * i as f64 / 100.0;
            let out = arp(t, measure, x, y, z).abs();
            assert!(out <= prev, "magnitude rose at t={t}: {prev} -> {out}");
            prev = out;
        }
    }

    #[test]
    fn test_kick_starts_at_full_phase() {
        // ts = 0: sin(50) with no amplitude decay
        assert!((arp(0.0, 0.5, 50.0, 40.0, 0.0) - 50.0f64.sin()).abs() < 1e-12);
    }
}
