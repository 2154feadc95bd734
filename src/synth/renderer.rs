//! The whole piece, one sample at a time.
//!
//! ```text
//!   host time ─▶ Clock ─▶ t ─┬─▶ slide(melody) ─▶ n, b
//!                            │
//!   lead    osc, osc2  (tri) ─▶ arp ×3 ───────────────────────┐
//!   bass    bass_osc   (sin) ─▶ filter  ─▶ clip ─▶ tremolo ───┤
//!           bass2_osc  (sin) ─▶ filter2 ─▶ clip ─▶ tremolo ───┤
//!           bass3_osc  (sin) ─▶ filter2 ─▶ clip ─▶ tremolo ───┼─▶ Σ × 0.5
//!   drums   arp kick, hat_osc (ramp) + noise ─▶ arp ×2 ───────┤
//!   gains   Arrangement::levels(t) ───────────────────────────┘
//! ```
//!
//! `filter2` is fed by two bass voices in turn each sample, so their
//! recurrences bleed into each other. Splitting it into one filter per
//! voice changes the sound.

use tracing::debug;

use crate::config::SynthConfig;
use crate::dsp::distortion::soft_clip;
use crate::dsp::lfo::tri;
use crate::dsp::{DiodeLadderFilter, Noise, Waveform, WavetableOscillator};
use crate::error::ConfigError;
use crate::io::SampleClock;
use crate::sequencing::{arp, octave, sequence, slide, BeatTime, Clock, Tuning};
use crate::synth::arrangement::{Arrangement, MixLevels, Section};
use crate::synth::patterns::{self, CRASH_PATTERN, HAT_PATTERN, MELODY_LEN};

/// Exponent for the melody glide: hold the note, snap at the step's end.
const GLIDE: f64 = 32.0;

/// Overall output gain.
const MASTER: f64 = 0.5;

/// Resonance and feedback highpass of the main bass filter.
const BASS_RESONANCE: f64 = 0.23;
const BASS_HIGHPASS: f64 = 0.0011;

/// Raw output of every layer before the arrangement gains.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layers {
    pub synth: f64,
    pub synth2: f64,
    pub synth3: f64,
    pub kick: f64,
    pub hat: f64,
    pub crash: f64,
    pub bass: f64,
    pub bass2: f64,
    pub bass3: f64,
}

impl Layers {
    /// Weighted sum, before the master gain.
    pub fn mix(&self, levels: &MixLevels) -> f64 {
        2.0 * (self.synth2 * levels.synth2)
            + 1.0 * (self.synth3 * levels.synth3)
            + 2.0 * (self.synth * levels.synth)
            + 3.0 * (self.kick * levels.kick)
            + 0.35 * self.hat
            + 0.5 * (self.bass * levels.bass)
            + 2.0 * (self.bass2 * levels.bass)
            + 0.2 * (self.bass3 * levels.bass)
            + 0.5 * (self.crash * levels.kick)
    }
}

/// Everything computed for one sample.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub time: BeatTime,
    pub section: Section,
    pub levels: MixLevels,
    pub layers: Layers,
    pub output: f32,
}

pub struct Renderer {
    config: SynthConfig,
    clock: Clock,
    arrangement: Arrangement,
    melody: [f64; MELODY_LEN],
    hat_note: f64,
    noise: Noise,

    osc: WavetableOscillator,
    osc2: WavetableOscillator,
    bass_osc: WavetableOscillator,
    bass2_osc: WavetableOscillator,
    bass3_osc: WavetableOscillator,
    hat_osc: WavetableOscillator,

    filter: DiodeLadderFilter,
    filter2: DiodeLadderFilter,

    rejected: u64,
}

impl Renderer {
    pub fn new(config: SynthConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let clock = Clock::new(config.bpm)?;
        let arrangement = Arrangement::new(config.bar_length)?;
        let tuning = Tuning::from_config(&config)?;
        let (hat_degree, hat_octave) = patterns::HAT_NOTE;

        let table = |waveform| {
            WavetableOscillator::with_size(waveform, config.table_size, config.sample_rate)
        };

        let mut filter = DiodeLadderFilter::new();
        filter.set_resonance(BASS_RESONANCE);
        filter.set_highpass_cutoff(BASS_HIGHPASS);

        let renderer = Self {
            config,
            clock,
            arrangement,
            melody: patterns::melody(&tuning),
            hat_note: tuning.note(hat_degree, hat_octave),
            noise: Noise::default(),
            osc: table(Waveform::Triangle)?,
            osc2: table(Waveform::Triangle)?,
            bass_osc: table(Waveform::Sine)?,
            bass2_osc: table(Waveform::Sine)?,
            bass3_osc: table(Waveform::Sine)?,
            hat_osc: table(Waveform::Ramp)?,
            filter,
            filter2: DiodeLadderFilter::new(),
            rejected: 0,
        };

        debug!(
            sample_rate = config.sample_rate,
            bpm = config.bpm,
            tuning = config.tuning,
            transpose = config.transpose,
            bar_length = config.bar_length,
            table_size = config.table_size,
            hat_note = renderer.hat_note,
            "renderer ready"
        );

        Ok(renderer)
    }

    /// Next output sample for host time `raw` (seconds since the start).
    #[inline]
    pub fn next_sample(&mut self, raw: f64) -> f32 {
        self.next_frame(raw).output
    }

    pub fn next_frame(&mut self, raw: f64) -> Frame {
        let time = self.clock.tick(raw);
        let t = time.t;
        let noise = self.noise.next_sample();

        let n = slide(t, 1.0 / 4.0, &self.melody, GLIDE);
        let b = slide(t, 1.0 / 8.0, &self.melody, GLIDE);

        // lead
        let vibrato = tri(t, 24.0) * 2.0;
        let drift = tri(t, n / 10_000.0);
        let synth_osc = self.osc.play(n + vibrato) + drift;
        let synth_osc2 = self.osc2.play(n + vibrato) + drift;
        let synth = arp(t, 1.0 / 16.0, synth_osc, 1000.0, 1.0);
        let synth2 = arp(t, 1.0 / 16.0, synth_osc, 100.0, 1.0);
        let synth3 = arp(t, 1.0 / n, synth_osc2, 100.0, 1.0);

        // bass; filter2 order matters, see module docs
        self.filter.set_cutoff(0.5 + tri(t, 1.0 / 2.0) * 0.02);
        let bass = self.bass_osc.play(octave(b, 1.0 / 8.0));
        let bass = soft_clip(self.filter.run(bass * 2.0), 10.0);
        let bass = bass * (0.8 - tri(t, 8.0) * 0.5);

        let bass2 = self.bass2_osc.play(octave(b, 1.0 / 16.0));
        let bass2 = soft_clip(self.filter2.run(bass2), 2.0);
        let bass2 = bass2 * (0.8 - tri(t, 4.0) * 0.5);

        let bass3 = self.bass3_osc.play(octave(b, 1.0 / 4.0));
        let bass3 = soft_clip(self.filter2.run(bass3), n);
        let bass3 = bass3 * (0.8 - tri(t, 8.0) * 0.5);

        // drums; hat_osc advances twice per sample
        let kick = arp(t, 1.0 / 2.0, 50.0, 40.0, 0.0);
        let hat_burst = self.hat_osc.play(self.hat_note) + noise * 1.8;
        let hat = sequence(t, 1.0 / 4.0, &HAT_PATTERN) * arp(t, 1.0 / 16.0, hat_burst, 2.0, 70.0);
        let crash_burst = self.hat_osc.play(self.hat_note) + noise * 2.0;
        let crash =
            sequence(t, 1.0 / 8.0, &CRASH_PATTERN) * arp(t, 1.0 / 4.0, crash_burst, 20.0, 20.0);

        let layers = Layers {
            synth,
            synth2,
            synth3,
            kick,
            hat,
            crash,
            bass,
            bass2,
            bass3,
        };
        let section = self.arrangement.section(t);
        let levels = self.arrangement.levels(t);

        let mixed = MASTER * layers.mix(&levels);
        let output = if mixed.is_finite() {
            mixed as f32
        } else {
            self.rejected = self.rejected.saturating_add(1);
            0.0
        };

        Frame {
            time,
            section,
            levels,
            layers,
            output,
        }
    }

    /// Return to the state of a freshly built renderer: oscillator phases,
    /// filter registers and the noise seed. The rejected-sample count is a
    /// running total and survives.
    pub fn reset(&mut self) {
        for osc in [
            &mut self.osc,
            &mut self.osc2,
            &mut self.bass_osc,
            &mut self.bass2_osc,
            &mut self.bass3_osc,
            &mut self.hat_osc,
        ] {
            osc.reset();
        }
        // both filters sit well below the self-oscillation limit, so these
        // always clear
        self.filter.reset();
        self.filter2.reset();
        self.noise = Noise::default();
    }

    /// Fill `out` with consecutive samples, advancing `clock` once per
    /// sample.
    pub fn render_block(&mut self, clock: &mut SampleClock, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(clock.advance());
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    pub fn melody(&self) -> &[f64] {
        &self.melody
    }

    /// Section playing at host time `raw`.
    pub fn section(&self, raw: f64) -> Section {
        self.arrangement.section(self.clock.tick(raw).t)
    }

    /// Arrangement gains at host time `raw`.
    pub fn mix_levels(&self, raw: f64) -> MixLevels {
        self.arrangement.levels(self.clock.tick(raw).t)
    }

    /// Samples replaced by silence because something went non-finite,
    /// in the mix or inside either filter.
    pub fn rejected_samples(&self) -> u64 {
        self.rejected + self.filter.rejected_samples() + self.filter2.rejected_samples()
    }
}
