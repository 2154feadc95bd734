//! Wobbles - audio setup and the realtime callback

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use rtrb::RingBuffer;
use tracing::{error, info, warn};

use super::ui::{ControlMessage, PlaybackState, SessionInfo, UiApp};

use wobble_dsp::{
    dsp::distortion::hard_clip_buffer, io::interleave_mono, io::SampleClock, Renderer,
    SynthConfig, MAX_BLOCK_SIZE,
};

/// Samples buffered for the oscilloscope and spectrum.
const SCOPE_CAPACITY: usize = 8192;
/// Transport updates buffered for the UI (latest one wins).
const STATE_CAPACITY: usize = 64;
const CONTROL_CAPACITY: usize = 16;

/// Main application
pub struct Wobbles {
    config: SynthConfig,
}

impl Wobbles {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Open the default output device and play until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f64;
        let channels = stream_config.channels() as usize;

        // The device decides the rate; everything else comes from the config.
        let config = self.config.with_sample_rate(sample_rate);
        let mut renderer = Renderer::new(config).wrap_err("invalid synth configuration")?;
        let mut clock = SampleClock::new(sample_rate).wrap_err("invalid device sample rate")?;

        info!(
            device = %device.name().unwrap_or_default(),
            sample_rate,
            channels,
            bpm = config.bpm,
            "starting playback"
        );

        let session = SessionInfo::new(&renderer, channels);

        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_CAPACITY);
        let (mut state_tx, state_rx) = RingBuffer::<PlaybackState>::new(STATE_CAPACITY);
        let (control_tx, mut control_rx) = RingBuffer::<ControlMessage>::new(CONTROL_CAPACITY);

        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];
        let mut playing = true;

        let stream = device.build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                while let Ok(message) = control_rx.pop() {
                    match message {
                        ControlMessage::TogglePlayback => playing = !playing,
                        ControlMessage::Restart => {
                            clock.reset();
                            renderer.reset();
                        }
                    }
                }

                if !playing {
                    data.fill(0.0);
                } else {
                    for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                        let frames = chunk.len() / channels;
                        let block = &mut render_buf[..frames];

                        renderer.render_block(&mut clock, block);
                        hard_clip_buffer(block, 1.0);
                        interleave_mono(block, chunk, channels);

                        for &sample in block.iter() {
                            // scope is best-effort; drop samples when the UI lags
                            if scope_tx.push(sample).is_err() {
                                break;
                            }
                        }
                    }
                }

                let seconds = clock.seconds();
                let _ = state_tx.push(PlaybackState {
                    seconds,
                    beat: renderer.clock().tick(seconds).t,
                    section: renderer.section(seconds),
                    levels: renderer.mix_levels(seconds),
                    rejected: renderer.rejected_samples(),
                    playing,
                });
            },
            |err| error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(scope_rx, state_rx, control_tx, session).run(&mut terminal);
        ratatui::restore();
        drop(stream);

        let last = result?;
        if last.rejected > 0 {
            warn!(rejected = last.rejected, "non-finite samples were replaced by silence");
        }
        info!(seconds = last.seconds, "stopped");
        Ok(())
    }
}
