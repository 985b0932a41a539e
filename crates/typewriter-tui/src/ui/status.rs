//! Status bar
//!
//! Displays the animation phase, the active word and completed passes.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use typewriter_core::{ClockInstant, Phase};

use crate::App;

/// Render the status bar.
pub fn render<I: ClockInstant>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let engine = app.view().engine();

    let phase = match engine.phase() {
        Phase::Typing => Span::styled("typing", Style::default().fg(Color::Green)),
        Phase::Pausing => Span::styled("pausing", Style::default().fg(Color::Yellow)),
        Phase::Deleting => Span::styled("deleting", Style::default().fg(Color::Red)),
        Phase::Done => Span::styled(
            "done",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let config = engine.config();
    let info = if config.looping {
        format!(
            "  word {}/{}  loop {}",
            engine.active_index() + 1,
            config.words.len(),
            engine.state().loop_count()
        )
    } else {
        format!("  word {}/{}", engine.active_index() + 1, config.words.len())
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        phase,
        Span::styled(info, Style::default().fg(Color::Gray)),
        Span::styled("  q quit", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(paragraph, area);
}
