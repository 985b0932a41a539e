//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Deadlines are awaited on tokio
//! timers through [`SystemClock`].

use std::{
    io::{self, Stdout, stdout},
    time::Instant,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use typewriter_app::{App, AppEvent, Driver, KeyInput};
use typewriter_core::{Clock, SystemClock};

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Puts the terminal into raw mode on the alternate screen for its whole
/// lifetime and restores it on [`Driver::stop`] or drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    clock: SystemClock,
    active: bool,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, clock: SystemClock::new(), active: true })
    }

    /// Convert a crossterm key event to `KeyInput`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Interrupt)
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Esc => Some(KeyInput::Esc),
            _ => None,
        }
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self, deadline: Option<Instant>) -> Result<AppEvent, Self::Error> {
        let clock = self.clock;

        loop {
            let tick = async move {
                match deadline {
                    Some(deadline) => clock.sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(key_input) = Self::convert_key(key) {
                                return Ok(AppEvent::Key(key_input));
                            }
                        },
                        Some(Ok(Event::Resize(cols, rows))) => {
                            return Ok(AppEvent::Resize(cols, rows));
                        },
                        Some(Ok(_)) => {},
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Err(TerminalError::InputClosed),
                    }
                }

                // Engine deadline
                () = tick => return Ok(AppEvent::Tick),
            }
        }
    }

    fn now(&self) -> Self::Instant {
        self.clock.now()
    }

    fn render(&mut self, app: &App<Instant>) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
