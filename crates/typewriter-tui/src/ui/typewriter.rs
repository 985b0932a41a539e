//! Animated line
//!
//! Draws the current fragment centred in its area. The cursor glyph keeps
//! its style class; [`CURSOR_CLASS`] maps to a slow terminal blink.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use typewriter_app::{CURSOR_CLASS, CursorGlyph, Fragment};

/// Render the animated line.
pub fn render(frame: &mut Frame, fragment: &Fragment, area: Rect) {
    let paragraph = Paragraph::new(line(fragment)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Fragment as a styled line: text span then, if present, the cursor span.
pub fn line(fragment: &Fragment) -> Line<'static> {
    let mut spans = vec![Span::raw(fragment.text.clone())];
    if let Some(cursor) = &fragment.cursor {
        spans.push(Span::styled(cursor.glyph.clone(), cursor_style(cursor)));
    }
    Line::from(spans)
}

fn cursor_style(cursor: &CursorGlyph) -> Style {
    if cursor.class == CURSOR_CLASS {
        Style::default().add_modifier(Modifier::SLOW_BLINK)
    } else {
        Style::default()
    }
}
