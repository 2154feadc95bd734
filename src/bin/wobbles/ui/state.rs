//! Shared state types for UI communication
//!
//! Static data is captured once before the stream starts; the per-callback
//! update is `Copy` so pushing it from the audio thread never allocates.

use wobble_dsp::synth::{MixLevels, Section};
use wobble_dsp::Renderer;

/// Commands sent from UI thread to audio thread
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    /// Toggle play/pause
    TogglePlayback,
    /// Jump back to the start of the piece
    Restart,
}

/// Captured once at startup (can allocate)
#[derive(Clone, Debug)]
pub struct SessionInfo {
    pub bpm: f64,
    pub sample_rate: f64,
    pub channels: usize,
    /// Bar length in beats.
    pub bar_length: f64,
    /// Each section with its start, in beats.
    pub sections: Vec<(Section, f64)>,
}

impl SessionInfo {
    pub fn new(renderer: &Renderer, channels: usize) -> Self {
        let config = renderer.config();
        let arrangement = renderer.arrangement();
        Self {
            bpm: renderer.clock().bpm(),
            sample_rate: config.sample_rate,
            channels,
            bar_length: arrangement.bar_length(),
            sections: Section::ALL
                .iter()
                .map(|&section| (section, arrangement.section_start(section)))
                .collect(),
        }
    }
}

/// Sent from the audio thread once per callback (Copy, no allocations)
#[derive(Clone, Copy, Debug)]
pub struct PlaybackState {
    /// Host seconds since the start of the piece
    pub seconds: f64,
    /// Tempo-scaled beat time
    pub beat: f64,
    pub section: Section,
    pub levels: MixLevels,
    /// Samples the renderer replaced with silence so far
    pub rejected: u64,
    pub playing: bool,
}

impl PlaybackState {
    pub fn initial() -> Self {
        Self {
            seconds: 0.0,
            beat: 0.0,
            section: Section::Intro,
            levels: MixLevels::INTRO,
            rejected: 0,
            playing: true,
        }
    }
}
