use std::f64::consts::TAU;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/*
Wavetable Oscillator
====================

Instead of evaluating sin() or a piecewise formula every sample, we compute
one full cycle of the waveform once, store it in a table, and then walk
through that table at a speed proportional to the requested frequency.

Vocabulary
----------

  table       N precomputed samples covering exactly one cycle.

  phase       Read position inside the table, in samples: [0, N).
              Fractional - the part after the decimal point is used for
              interpolation.

  size coeff  N / sample_rate. Multiplying a frequency (Hz) by this gives
              how many table samples to advance per output sample.

Example: N = 512, sample_rate = 44100, freq = 441 Hz
  increment = 441 * 512 / 44100 = 5.12 table samples per output sample
  one cycle = 512 / 5.12 = 100 output samples = 441 cycles per second ✓


Linear Interpolation
--------------------

The phase almost never lands exactly on a table entry. We blend the two
neighbours:

    table[i]        table[i+1]
       ●───────────────●
            ◆ phase = i + alpha
    out = table[i] + (table[i+1] - table[i]) * alpha

At the last entry, "i+1" wraps to table[0] so the cycle closes seamlessly.
Turning interpolation off gives the raw stepped lookup (grittier, cheaper).


Waveforms (x = i / N, one cycle over x ∈ [0, 1))
------------------------------------------------

  sine       sin(2πx)
  sawtooth   2(x - round(x))          rises 0 → 1, jumps to -1 at x = 0.5
  ramp       -2(x - round(x))         sawtooth upside down
  triangle   1 - 4|round(x - ¼) - (x - ¼)|   0 → 1 → 0 → -1 → 0
  square     +1 for x < ½, -1 after

round() here is round-half-up, so x = 0.5 lands on the falling edge.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Ramp,
    Triangle,
    Square,
}

impl Waveform {
    /// Value of one cycle at normalized position `x` (one period per unit).
    pub fn value_at(self, x: f64) -> f64 {
        match self {
            Waveform::Sine => (TAU * x).sin(),
            Waveform::Saw => 2.0 * (x - round_half_up(x)),
            Waveform::Ramp => -2.0 * (x - round_half_up(x)),
            Waveform::Triangle => {
                let shifted = x - 0.25;
                1.0 - 4.0 * (round_half_up(shifted) - shifted).abs()
            }
            Waveform::Square => {
                if x.rem_euclid(1.0) < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

impl FromStr for Waveform {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sin" | "sine" => Ok(Waveform::Sine),
            "saw" | "sawtooth" => Ok(Waveform::Saw),
            "ramp" => Ok(Waveform::Ramp),
            "tri" | "triangle" => Ok(Waveform::Triangle),
            "sqr" | "square" => Ok(Waveform::Square),
            _ => Err(ConfigError::UnknownWaveform(name.to_string())),
        }
    }
}

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Single-cycle wavetable with a running phase accumulator.
#[derive(Debug, Clone)]
pub struct WavetableOscillator {
    table: Box<[f32]>,
    waveform: Waveform,
    phase: f64,
    size_coefficient: f64,
    interpolate: bool,
}

impl WavetableOscillator {
    /// Build an oscillator whose table holds one sample per host sample
    /// (table size = sample rate).
    pub fn new(waveform: Waveform, sample_rate: f64) -> Result<Self, ConfigError> {
        if !(sample_rate.is_finite() && sample_rate >= 1.0) {
            return Err(ConfigError::InvalidSampleRate(sample_rate));
        }
        Self::with_size(waveform, sample_rate as usize, sample_rate)
    }

    /// Build an oscillator with an explicit table size.
    pub fn with_size(
        waveform: Waveform,
        table_size: usize,
        sample_rate: f64,
    ) -> Result<Self, ConfigError> {
        if table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate(sample_rate));
        }

        let size = table_size as f64;
        let table = (0..table_size)
            .map(|i| waveform.value_at(i as f64 / size) as f32)
            .collect();

        Ok(Self {
            table,
            waveform,
            phase: 0.0,
            size_coefficient: size / sample_rate,
            interpolate: true,
        })
    }

    /// Enable or disable linear interpolation (enabled by default).
    pub fn with_interpolation(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    /// Advance by one sample at `freq` Hz and return the new output.
    ///
    /// The phase wraps once per call, so `freq` must stay below the sample
    /// rate (one full table per sample) and should be non-negative. Steps
    /// outside that range are folded back into the table rather than read
    /// out of bounds.
    #[inline]
    pub fn play(&mut self, freq: f64) -> f64 {
        let len = self.table.len();
        let size = len as f64;

        self.phase += freq * self.size_coefficient;
        if self.phase >= size {
            self.phase -= size;
        }
        if !(0.0..size).contains(&self.phase) {
            let folded = self.phase.rem_euclid(size);
            // rem_euclid rounds up to exactly `size` for tiny negatives
            self.phase = if folded < size { folded } else { 0.0 };
        }

        let index = (self.phase as usize).min(len - 1);
        let curr = self.table[index] as f64;
        if !self.interpolate {
            return curr;
        }

        let alpha = self.phase - index as f64;
        let next = self.table[if index + 1 == len { 0 } else { index + 1 }] as f64;
        curr + (next - curr) * alpha
    }

    pub fn table(&self) -> &[f32] {
        &self.table
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Current read position in table samples, `[0, table_size)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn size_coefficient(&self) -> f64 {
        self.size_coefficient
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
