//! Transport bar: tempo, position in the piece, output level

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{PlaybackState, SessionInfo};

/// Peak and RMS of the most recent scope window
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// 1-based bar and beat for a beat time. Bars are not a whole number of beats.
fn bar_and_beat(beat: f64, bar_length: f64) -> (u64, u64) {
    if !(beat.is_finite() && bar_length > 0.0) || beat < 0.0 {
        return (1, 1);
    }
    let bar = (beat / bar_length).floor() as u64 + 1;
    let within = (beat % bar_length).floor() as u64 + 1;
    (bar, within)
}

fn format_elapsed(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor();
    format!("{:02}:{:05.2}", minutes as u64, total - minutes * 60.0)
}

pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    session: &SessionInfo,
    state: &PlaybackState,
    stats: &AudioStats,
) {
    let block = Block::default().title(" wobbles ").borders(Borders::ALL);

    let (bar, beat) = bar_and_beat(state.beat, session.bar_length);
    let (play_symbol, play_label, play_color) = if state.playing {
        ("▶", "Playing", Color::Green)
    } else {
        ("⏸", "Paused", Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(
            format!(" BPM: {:.0}  ", session.bpm),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{play_symbol} {play_label}  "),
            Style::default().fg(play_color),
        ),
        Span::styled(
            format!("{}  ", format_elapsed(state.seconds)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Bar {bar} | Beat {beat}  "),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{}  ", state.section.name()),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:.1}kHz x{}  ", session.sample_rate / 1000.0, session.channels),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ];

    if state.rejected > 0 {
        spans.push(Span::styled(
            format!("  dropped: {}", state.rejected),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
