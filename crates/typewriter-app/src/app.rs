//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the typewriter
//! view and decides when the screen needs redrawing, completely decoupled
//! from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Advances the animation when the runtime reports a passed deadline.
//! - Requests a render only when the visible fragment changed.
//! - Quits on `q`, `Esc` or Ctrl-C, and after completion when asked to.
//! - Stores terminal dimensions to handle resize events.

use std::{fmt, time::Instant};

use typewriter_core::{ClockInstant, ConfigError, EngineError, Hooks, TypewriterConfig};

use crate::{AppAction, AppEvent, Fragment, KeyInput, TypewriterView, ViewProps};

/// Hooks as stored by the App.
type BoxedHooks = Box<dyn Hooks + Send>;

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
pub struct App<I = Instant>
where
    I: ClockInstant,
{
    /// Engine and presentation props.
    view: TypewriterView<BoxedHooks, I>,
    /// Fragment shown by the last render.
    frame: Fragment,
    /// Quit once a non-looping animation finished.
    exit_on_done: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl<I> App<I>
where
    I: ClockInstant,
{
    /// Create a new App and start the animation at `now`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(
        config: TypewriterConfig,
        props: ViewProps,
        hooks: BoxedHooks,
        now: I,
    ) -> Result<Self, ConfigError> {
        let view = TypewriterView::new(config, props, hooks, now)?;
        let frame = view.fragment();
        Ok(Self { view, frame, exit_on_done: false, terminal_size: (80, 24) })
    }

    /// Quit after the animation finishes.
    #[must_use]
    pub fn with_exit_on_done(mut self, exit_on_done: bool) -> Self {
        self.exit_on_done = exit_on_done;
        self
    }

    /// Process an event observed at `now` and return actions.
    ///
    /// # Errors
    ///
    /// Propagates hook failures raised while ticking.
    pub fn handle(&mut self, event: AppEvent, now: I) -> Result<Vec<AppAction>, EngineError> {
        match event {
            AppEvent::Tick => self.tick(now),
            AppEvent::Key(KeyInput::Esc | KeyInput::Interrupt | KeyInput::Char('q')) => {
                Ok(vec![AppAction::Quit])
            },
            AppEvent::Key(_) => Ok(vec![]),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                Ok(vec![AppAction::Render])
            },
        }
    }

    fn tick(&mut self, now: I) -> Result<Vec<AppAction>, EngineError> {
        let frame = self.view.render(now)?;

        let mut actions = Vec::new();
        if frame != self.frame {
            self.frame = frame;
            actions.push(AppAction::Render);
        }
        if self.exit_on_done && self.view.engine().is_done() {
            tracing::info!("animation finished, quitting");
            actions.push(AppAction::Quit);
        }

        Ok(actions)
    }

    /// Replace the animation configuration at `now`.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the old configuration if
    /// `config` is invalid.
    pub fn reconfigure(
        &mut self,
        config: TypewriterConfig,
        now: I,
    ) -> Result<Vec<AppAction>, ConfigError> {
        self.view.engine_mut().reconfigure(config, now)?;

        let frame = self.view.fragment();
        if frame == self.frame {
            return Ok(vec![]);
        }
        self.frame = frame;
        Ok(vec![AppAction::Render])
    }

    /// Fragment to draw.
    pub fn frame(&self) -> &Fragment {
        &self.frame
    }

    /// When the runtime should next deliver [`AppEvent::Tick`]. `None` once
    /// the animation is done.
    pub fn deadline(&self) -> Option<I> {
        self.view.engine().deadline()
    }

    /// Typewriter view (engine and props).
    pub fn view(&self) -> &TypewriterView<BoxedHooks, I> {
        &self.view
    }

    /// Whether the App quits once the animation finishes.
    pub fn exit_on_done(&self) -> bool {
        self.exit_on_done
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

impl<I> fmt::Debug for App<I>
where
    I: ClockInstant,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("frame", &self.frame)
            .field("phase", &self.view.engine().phase())
            .field("deadline", &self.deadline())
            .field("exit_on_done", &self.exit_on_done)
            .field("terminal_size", &self.terminal_size)
            .finish_non_exhaustive()
    }
}
