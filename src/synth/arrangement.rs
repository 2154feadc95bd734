/*
Arrangement
===========

The piece is laid out in bars of fixed length (7.4 beats by default). Each
layer group has a gain in [0, 1] that depends only on beat time:

  bars   0        1        2        3        4        5        6
         │ Intro  │ KickIn │BassRise│ Groove │ Crunch │  Full  │ Duet ...
  synth  ████████████████████████████████████████████████████░▒░▒░▒
  synth2          ███████████████████████████████████████████████████
  kick            ███████████████████████████████████████████████████
  bass                     ▁▃▅▇████████████████████████████████████████
  synth3                                     ▁▃▅▇██████████▒░▒░▒░▒

Rises are linear over exactly one bar. In the Duet, the pluck (synth) and
the crunch (synth3) trade places every beat:

  even beat: synth3 = t mod 2,     synth = 1 - t mod 2
  odd beat:  synth3 = 1 - t mod 2, synth = t mod 2

On odd beats `t mod 2` is in [1, 2), so the crunch goes slightly negative
(phase-inverted) while the pluck is pushed above unity. That asymmetry is
part of the sound and is kept as is.
*/

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Pluck only.
    Intro,
    /// Kick, hats, crash and the second synth come in.
    KickIn,
    /// Bass voices fade in over one bar.
    BassRise,
    Groove,
    /// The third synth layer fades in over one bar.
    CrunchRise,
    Full,
    /// Pluck and crunch alternate every beat, forever.
    Duet,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Intro,
        Section::KickIn,
        Section::BassRise,
        Section::Groove,
        Section::CrunchRise,
        Section::Full,
        Section::Duet,
    ];

    /// Bar at which this section begins.
    pub fn start_bar(self) -> f64 {
        match self {
            Section::Intro => 0.0,
            Section::KickIn => KICK_BAR,
            Section::BassRise => BASS_BAR,
            Section::Groove => BASS_BAR + 1.0,
            Section::CrunchRise => CRUNCH_BAR,
            Section::Full => CRUNCH_BAR + 1.0,
            Section::Duet => DUET_BAR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::KickIn => "kick in",
            Section::BassRise => "bass rise",
            Section::Groove => "groove",
            Section::CrunchRise => "crunch rise",
            Section::Full => "full",
            Section::Duet => "duet",
        }
    }
}

const KICK_BAR: f64 = 1.0;
const BASS_BAR: f64 = 2.0;
const CRUNCH_BAR: f64 = 4.0;
const DUET_BAR: f64 = 6.0;

/// Gain per layer group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixLevels {
    /// Short pluck lead.
    pub synth: f64,
    /// Longer pluck, same oscillator.
    pub synth2: f64,
    /// Crunch layer on the second lead oscillator.
    pub synth3: f64,
    /// All three bass voices.
    pub bass: f64,
    /// Kick and crash.
    pub kick: f64,
}

impl MixLevels {
    /// Gains before the kick comes in: the lead alone.
    pub const INTRO: MixLevels = MixLevels {
        synth: 1.0,
        synth2: 0.0,
        synth3: 0.0,
        bass: 0.0,
        kick: 0.0,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Arrangement {
    bar: f64,
}

impl Arrangement {
    /// `bar` is the bar length in beats.
    pub fn new(bar: f64) -> Result<Self, ConfigError> {
        if !(bar.is_finite() && bar > 0.0) {
            return Err(ConfigError::InvalidBarLength(bar));
        }
        Ok(Self { bar })
    }

    pub fn bar_length(&self) -> f64 {
        self.bar
    }

    /// Beat time at which `section` starts.
    pub fn section_start(&self, section: Section) -> f64 {
        section.start_bar() * self.bar
    }

    pub fn section(&self, t: f64) -> Section {
        let bar = self.bar;
        if t > DUET_BAR * bar {
            Section::Duet
        } else if t >= (CRUNCH_BAR + 1.0) * bar {
            Section::Full
        } else if t > CRUNCH_BAR * bar {
            Section::CrunchRise
        } else if t >= (BASS_BAR + 1.0) * bar {
            Section::Groove
        } else if t > BASS_BAR * bar {
            Section::BassRise
        } else if t > KICK_BAR * bar {
            Section::KickIn
        } else {
            Section::Intro
        }
    }

    /// Linear 0 → 1 over the bar starting at `start_bar`.
    #[inline]
    fn rise(&self, t: f64, start_bar: f64) -> f64 {
        ((t - start_bar * self.bar) / self.bar).clamp(0.0, 1.0)
    }

    pub fn levels(&self, t: f64) -> MixLevels {
        let section = self.section(t);
        let mut levels = MixLevels::INTRO;

        if section >= Section::KickIn {
            levels.kick = 1.0;
            levels.synth2 = 1.0;
        }

        levels.bass = match section {
            Section::Intro | Section::KickIn => 0.0,
            Section::BassRise => self.rise(t, BASS_BAR),
            _ => 1.0,
        };

        levels.synth3 = match section {
            Section::CrunchRise => self.rise(t, CRUNCH_BAR),
            Section::Full => 1.0,
            Section::Duet => {
                let p = t % 2.0;
                if t.floor() % 2.0 == 0.0 {
                    levels.synth = 1.0 - p;
                    p
                } else {
                    levels.synth = p;
                    1.0 - p
                }
            }
            _ => 0.0,
        };

        levels
    }
}
