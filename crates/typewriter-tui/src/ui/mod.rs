//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod status;
mod typewriter;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use typewriter_core::ClockInstant;

use crate::App;

/// Render the entire UI: the animated line centred, a status bar at the
/// bottom.
pub fn render<I: ClockInstant>(frame: &mut Frame, app: &App<I>) {
    const LINE_HEIGHT: u16 = 1;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(LINE_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [_, line_area, _, status_area] = chunks.as_ref() else {
        return;
    };

    typewriter::render(frame, app.frame(), *line_area);
    status::render(frame, app, *status_area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};
    use typewriter_app::{AppEvent, ViewProps};
    use typewriter_core::{NoopHooks, TypewriterConfig};

    use super::*;

    #[test]
    fn renders_centred_line_and_status() {
        let t0 = Instant::now();
        let config = TypewriterConfig::new(["Hello"]).with_type_speed(Duration::from_millis(10));
        let mut app =
            App::new(config, ViewProps::with_cursor("_"), Box::new(NoopHooks), t0).unwrap();
        for n in 1..=3 {
            app.handle(AppEvent::Tick, t0 + Duration::from_millis(10 * n)).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert_snapshot!(terminal.backend(), @r#"
        "                                        "
        "                  Hel_                  "
        "                                        "
        " typing  word 1/1  q quit               "
        "#);
    }
}
