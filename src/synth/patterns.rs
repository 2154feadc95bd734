//! Fixed pattern data for the piece.

use crate::sequencing::Tuning;

/// Hat accent per step (16 steps of 1/2 beat).
pub const HAT_PATTERN: [f64; 16] = [
    0.8, 0.3, 0.2, 0.1, 0.3, 0.1, 1.1, 0.1, //
    0.8, 0.4, 0.1, 0.1, 0.3, 0.2, 1.2, 0.1,
];

/// Crash accent per step (8 steps of 1/4 beat).
pub const CRASH_PATTERN: [f64; 8] = [0.0, 0.0, 0.0, 0.0, 2.0, 1.0, 0.5, 0.25];

/// Scale degrees of the riff, before it is mirrored.
pub const MELODY_DEGREES: [f64; 8] = [2.0, 9.0, 5.0, 8.0, 2.0, 9.0, 5.0, 2.0];
pub const MELODY_OCTAVE: f64 = 2.0;

pub const MELODY_LEN: usize = 2 * MELODY_DEGREES.len();

/// Degree and octave of the hat oscillator's pitch.
pub const HAT_NOTE: (f64, f64) = (16.0, 6.0);

/// The riff followed by itself backwards, in Hz.
pub fn melody(tuning: &Tuning) -> [f64; MELODY_LEN] {
    let forward = tuning.notes(MELODY_DEGREES, MELODY_OCTAVE);
    let half = forward.len();
    let mut melody = [0.0; MELODY_LEN];
    melody[..half].copy_from_slice(&forward);
    for (slot, freq) in melody[half..].iter_mut().zip(forward.iter().rev()) {
        *slot = *freq;
    }
    melody
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melody_is_a_palindrome() {
        let melody = melody(&Tuning::default());
        for i in 0..MELODY_LEN {
            assert_eq!(melody[i], melody[MELODY_LEN - 1 - i]);
        }
    }

    #[test]
    fn test_melody_starts_on_first_degree() {
        let tuning = Tuning::default();
        let melody = melody(&tuning);
        assert_eq!(melody[0], tuning.note(2.0, 2.0));
        assert_eq!(melody[1], tuning.note(9.0, 2.0));
        assert_eq!(melody[7], tuning.note(2.0, 2.0));
        assert_eq!(melody[8], tuning.note(2.0, 2.0));
    }
}
