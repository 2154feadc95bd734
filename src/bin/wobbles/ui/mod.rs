//! TUI module for wobbles
//!
//! Shows where the piece is, which layers are in, and what it sounds like.

mod levels;
mod spectrum;
mod state;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;
use tracing::debug;

pub use state::{ControlMessage, PlaybackState, SessionInfo};

use levels::render_levels;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size (also the FFT size)
const VIS_BUFFER_SIZE: usize = 2048;

/// UI application state
pub struct UiApp {
    scope_rx: Consumer<f32>,
    state_rx: Consumer<PlaybackState>,
    control_tx: Producer<ControlMessage>,
    session: SessionInfo,
    current_state: PlaybackState,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        scope_rx: Consumer<f32>,
        state_rx: Consumer<PlaybackState>,
        control_tx: Producer<ControlMessage>,
        session: SessionInfo,
    ) -> Self {
        let spectrum = SpectrumAnalyzer::new(VIS_BUFFER_SIZE, session.sample_rate as f32);
        Self {
            scope_rx,
            state_rx,
            control_tx,
            session,
            current_state: PlaybackState::initial(),
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum,
            should_quit: false,
        }
    }

    /// Run the UI event loop until quit; returns the last transport state.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<PlaybackState> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_state();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(self.current_state)
    }

    /// Read as many samples as available, keeping the last VIS_BUFFER_SIZE
    fn poll_audio(&mut self) {
        let available = self.scope_rx.slots();
        if available == 0 {
            return;
        }
        while let Ok(sample) = self.scope_rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    /// Keep only the latest state
    fn poll_state(&mut self) {
        while let Ok(state) = self.state_rx.pop() {
            if state.section != self.current_state.section {
                debug!(section = state.section.name(), beat = state.beat, "section change");
            }
            self.current_state = state;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let message = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => ControlMessage::TogglePlayback,
            KeyCode::Char('r') | KeyCode::Char('R') => ControlMessage::Restart,
            _ => return,
        };
        if self.control_tx.push(message).is_err() {
            debug!(?message, "control queue full, dropping");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Transport bar
                Constraint::Length(9),  // Sections and mix levels
                Constraint::Min(8),     // Waveform and spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_transport(frame, rows[0], &self.session, &self.current_state, &stats);
        render_levels(frame, rows[1], &self.session, &self.current_state);

        let scopes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        render_waveform(frame, scopes[0], &self.audio_buffer);
        render_spectrum(frame, scopes[1], self.spectrum.data());

        let help = Paragraph::new(" [Q] Quit  [Space] Play/Pause  [R] Restart")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[3]);
    }
}
