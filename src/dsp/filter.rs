use std::f64::consts::PI;

use crate::dsp::distortion::clip;

/*
Diode Ladder Lowpass
====================

Four one-pole stages in series with the output fed back, inverted, to the
input. The feedback amount (k) produces the resonant peak; a soft clipper
on the input keeps the loop bounded when k is large.

    x ──(+)──clip──▶[stage]──▶[stage]──▶[stage]──▶[stage]──┬──▶ A·y4
         ▲ -k                                             │
         └──────────────────[highpass]────────────────────┘

Unlike a transistor ladder, the diode stages are coupled: each stage loads
its neighbours, which is why the state update below mixes adjacent outputs.

| register | holds                                      |
| -------- | ------------------------------------------ |
| z0..z3   | trapezoidal integrator memories, one/stage |
| z4       | highpass memory in the feedback path       |

Solving the loop
----------------

The output depends on the input, which depends on the output. Instead of
iterating, the loop is treated as linear for one step:

    y5 = (g·x + s) / (1 + g·k)

where s is everything the registers contribute on their own and g is the
instantaneous gain. That estimate feeds the clipper, then the stages are
recomputed with the clipped input.

Coefficients depend on fc, and fc is modulated every sample by the caller,
so they are rebuilt on every call.
*/

/// Resonance (k) at or above which `reset()` leaves the registers alone.
const RESET_RESONANCE_LIMIT: f64 = 17.0;

const MIN_CUTOFF: f64 = 0.02;
const MAX_CUTOFF: f64 = 0.999;

#[derive(Debug, Clone)]
pub struct DiodeLadderFilter {
    z: [f64; 5],
    k: f64,
    a_gain: f64,
    ah: f64,
    bh: f64,
    fc: f64,
    rejected: u64,
}

impl Default for DiodeLadderFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiodeLadderFilter {
    /// No resonance, feedback highpass at 0.5, cutoff 0.5 (fc = 0.25).
    pub fn new() -> Self {
        let mut filter = Self {
            z: [0.0; 5],
            k: 0.0,
            a_gain: 0.0,
            ah: 0.0,
            bh: 0.0,
            fc: 0.0,
            rejected: 0,
        };
        filter.set_resonance(0.0);
        filter.set_highpass_cutoff(0.5);
        filter.set_cutoff(0.5);
        filter
    }

    /// `q` in roughly 0..1; k = 20q, output gain compensates with 1 + k/2.
    pub fn set_resonance(&mut self, q: f64) {
        self.k = 20.0 * q;
        self.a_gain = 1.0 + 0.5 * self.k;
    }

    /// Cutoff of the one-pole highpass in the feedback path, normalized so
    /// that 1.0 is Nyquist.
    pub fn set_highpass_cutoff(&mut self, fc: f64) {
        let k = fc * PI;
        self.ah = (k - 2.0) / (k + 2.0);
        self.bh = 2.0 / (k + 2.0);
    }

    /// Normalized cutoff. Squared for a more musical sweep, then kept away
    /// from the singular points at 0 and Nyquist.
    pub fn set_cutoff(&mut self, cutoff: f64) {
        let squared = cutoff * cutoff;
        self.fc = if squared <= 0.0 {
            MIN_CUTOFF
        } else if squared >= 1.0 {
            MAX_CUTOFF
        } else {
            squared.max(MIN_CUTOFF)
        };
    }

    /// Clear the registers unless the filter is self-oscillating, where a
    /// hard reset would click.
    pub fn reset(&mut self) {
        if self.k < RESET_RESONANCE_LIMIT {
            self.z = [0.0; 5];
        }
    }

    #[inline]
    pub fn run(&mut self, x: f64) -> f64 {
        let z = &self.z;

        // prewarp
        let a = 2.0 * (0.5 * PI * self.fc).tan();
        let ainv = 1.0 / a;
        let a2 = a * a;
        let b = 2.0 * a + 1.0;
        let b2 = b * b;
        let c = 1.0 / (2.0 * a2 * a2 - 4.0 * a2 * b2 + b2 * b2);
        let g0 = 2.0 * a2 * a2 * c;
        let g = g0 * self.bh;

        let s0 = (a2 * a * z[0]
            + a2 * b * z[1]
            + z[2] * (b2 - 2.0 * a2) * a
            + z[3] * (b2 - 3.0 * a2) * b)
            * c;
        let s = self.bh * s0 - z[4];

        let y5 = (g * x + s) / (1.0 + g * self.k);

        let y0 = clip(x - self.k * y5);
        let y5 = g * y0 + s;

        let y4 = g0 * y0 + s0;
        let y3 = (b * y4 - z[3]) * ainv;
        let y2 = (b * y3 - a * y4 - z[2]) * ainv;
        let y1 = (b * y2 - a * y3 - z[1]) * ainv;

        let next = [
            z[0] + 4.0 * a * (y0 - y1 + y2),
            z[1] + 2.0 * a * (y1 - 2.0 * y2 + y3),
            z[2] + 2.0 * a * (y2 - 2.0 * y3 + y4),
            z[3] + 2.0 * a * (y3 - 2.0 * y4),
            self.bh * y4 + self.ah * y5,
        ];
        let out = self.a_gain * y4;

        // A single NaN in the registers would poison every later call.
        if !out.is_finite() || next.iter().any(|v| !v.is_finite()) {
            self.z = [0.0; 5];
            self.rejected = self.rejected.saturating_add(1);
            return 0.0;
        }

        self.z = next;
        out
    }

    pub fn cutoff(&self) -> f64 {
        self.fc
    }

    /// Feedback amount k (20 × q).
    pub fn feedback(&self) -> f64 {
        self.k
    }

    pub fn output_gain(&self) -> f64 {
        self.a_gain
    }

    pub fn highpass_coefficients(&self) -> (f64, f64) {
        (self.ah, self.bh)
    }

    pub fn state(&self) -> &[f64; 5] {
        &self.z
    }

    /// Calls that produced a non-finite result and were replaced by silence.
    pub fn rejected_samples(&self) -> u64 {
        self.rejected
    }
}
