//! Closed-form modulation waveforms of beat time.

/*
Low Frequency Oscillators
=========================

These are evaluated straight from the beat clock instead of from a table
with a phase accumulator. That makes them stateless: the same `t` always
gives the same value, no matter what happened before, which is exactly
what a modulation source locked to the arrangement needs.

Frequencies here are in cycles per beat, not Hz.

  tri(t, 24)   vibrato on the lead, 24 wobbles per beat
  tri(t, 1/2)  slow cutoff drift on the main bass filter
  tri(t, 8)    tremolo on the bass voices

Remainders use `%`, which keeps the sign of the dividend. For the
non-negative times the renderer feeds in, that is the usual modulo.


Shapes
------

SINE     sin((t·f + 2 - phase/2)·2π)
         The `2 - phase/2` offset shifts the start point; with phase = 0
         it is a whole number of cycles and vanishes.

SAW      1 - 2·(t mod 1/f)·f
         Falls from 1 to -1 every 1/f beats.

TRIANGLE |1 - (2·t·f mod 2)|·2 - 1
         Starts at 1, reaches -1 halfway, back to 1.

SQUARE   sign of a sine whose phase argument is t itself, so the duty
         cycle drifts slowly over time.
*/

use std::f64::consts::TAU;

#[inline]
pub fn sin(t: f64, freq: f64, phase: f64) -> f64 {
    ((t * freq + (2.0 - phase / 2.0)) * TAU).sin()
}

#[inline]
pub fn saw(t: f64, freq: f64) -> f64 {
    1.0 - 2.0 * (t % (1.0 / freq)) * freq
}

#[inline]
pub fn tri(t: f64, freq: f64) -> f64 {
    (1.0 - (2.0 * t * freq) % 2.0).abs() * 2.0 - 1.0
}

#[inline]
pub fn sqr(t: f64, freq: f64) -> f64 {
    if sin(t, freq, t) > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_triangle_corners() {
        assert!((tri(0.0, 1.0) - 1.0).abs() < EPS);
        assert!((tri(0.25, 1.0) - 0.0).abs() < EPS);
        assert!((tri(0.5, 1.0) + 1.0).abs() < EPS);
        assert!((tri(0.75, 1.0) - 0.0).abs() < EPS);
        // period 1/f
        assert!((tri(0.1, 4.0) - tri(0.35, 4.0)).abs() < EPS);
    }

    #[test]
    fn test_saw_falls_over_one_period() {
        assert!((saw(0.0, 2.0) - 1.0).abs() < EPS);
        assert!((saw(0.25, 2.0) - 0.0).abs() < EPS);
        assert!(saw(0.49, 2.0) < -0.9);
    }

    #[test]
    fn test_sine_phase_offset() {
        // phase 0 shifts by exactly two cycles
        assert!(sin(0.0, 1.0, 0.0).abs() < EPS);
        assert!((sin(0.25, 1.0, 0.0) - 1.0).abs() < EPS);
        // phase 1 shifts by half a cycle
        assert!((sin(0.25, 1.0, 1.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_square_is_sign_of_drifting_sine() {
        for i in 0..200 {
            let t = i as f64 * 0.013;
            let expected = if sin(t, 3.0, t) > 0.0 { 1.0 } else { -1.0 };
            assert_eq!(sqr(t, 3.0), expected);
        }
    }
}
