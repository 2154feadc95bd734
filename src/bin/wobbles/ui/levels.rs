//! Arrangement panel: section list with the current one marked, and a gauge
//! per mix layer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use super::{PlaybackState, SessionInfo};

/// Gauges can only show [0, 1]; the duet pushes some weights outside it.
fn gauge_ratio(level: f64) -> f64 {
    if level.is_finite() {
        level.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn render_levels(frame: &mut Frame, area: Rect, session: &SessionInfo, state: &PlaybackState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    render_sections(frame, columns[0], session, state);
    render_gauges(frame, columns[1], state);
}

fn render_sections(frame: &mut Frame, area: Rect, session: &SessionInfo, state: &PlaybackState) {
    let lines: Vec<Line> = session
        .sections
        .iter()
        .map(|&(section, start)| {
            let current = section == state.section;
            let style = if current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if start <= state.beat {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(if current { "▶ " } else { "  " }, style),
                Span::styled(format!("{:<12}", section.name()), style),
                Span::styled(format!("{start:>7.1}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let block = Block::default().title(" Sections ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gauges(frame: &mut Frame, area: Rect, state: &PlaybackState) {
    let block = Block::default().title(" Mix ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let levels = state.levels;
    let rows = [
        ("lead", levels.synth, Color::Cyan),
        ("lead 2", levels.synth2, Color::Cyan),
        ("duet", levels.synth3, Color::LightCyan),
        ("bass", levels.bass, Color::Magenta),
        ("kick", levels.kick, Color::Red),
    ];

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (slot, (label, level, color)) in slots.iter().zip(rows) {
        let gauge = LineGauge::default()
            .label(format!("{label:<7}{level:>6.2}"))
            .filled_style(Style::default().fg(color))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .ratio(gauge_ratio(level));
        frame.render_widget(gauge, *slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(0.5), 0.5);
        assert_eq!(gauge_ratio(1.2), 1.0);
        assert_eq!(gauge_ratio(-0.4), 0.0);
        assert_eq!(gauge_ratio(f64::NAN), 0.0);
    }
}
