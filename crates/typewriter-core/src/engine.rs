//! Animation engine.
//!
//! [`Engine`] is the single owner of a [`Typewriter`], its pending
//! [`Timer`] deadline and its [`Hooks`]. Hosts call [`Engine::poll`] with the
//! current time whenever they render; once the armed deadline has passed,
//! the poll fires exactly one tick:
//!
//! 1. the machine performs one transition,
//! 2. the next deadline is armed from the returned delay,
//! 3. hooks run.
//!
//! Hooks run last, so a failing hook never leaves the engine half-updated.

use std::time::Instant;

use crate::{
    clock::ClockInstant,
    config::TypewriterConfig,
    error::{ConfigError, EngineError},
    hooks::{Hooks, NoopHooks},
    timer::Timer,
    typewriter::{AnimationState, Phase, Typewriter, TypewriterAction},
};

/// Typewriter animation engine.
///
/// Generic over `Instant` to support both real time and virtual time for
/// deterministic testing.
#[derive(Debug)]
pub struct Engine<H = NoopHooks, I = Instant>
where
    I: ClockInstant,
{
    machine: Typewriter,
    timer: Timer<I>,
    hooks: H,
}

impl<H, I> Engine<H, I>
where
    H: Hooks,
    I: ClockInstant,
{
    /// Create an engine and arm its first tick `type_speed` after `now`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(config: TypewriterConfig, hooks: H, now: I) -> Result<Self, ConfigError> {
        let machine = Typewriter::new(config)?;
        let mut timer = Timer::new();
        timer.arm(now, machine.current_delay());

        Ok(Self { machine, timer, hooks })
    }

    /// Current text, advancing the animation by one tick if the deadline
    /// has passed at `now`.
    ///
    /// Calling this again before the next deadline returns the same text.
    ///
    /// # Errors
    ///
    /// `EngineError::Hook` if a hook fails during the tick. The transition
    /// and the next deadline are committed regardless.
    pub fn poll(&mut self, now: I) -> Result<&str, EngineError> {
        if self.timer.take_due(now) {
            self.fire(now)?;
        } else {
            tracing::trace!(deadline = ?self.timer.deadline(), "poll before deadline");
        }

        Ok(self.machine.text())
    }

    /// Perform one transition and execute its actions.
    fn fire(&mut self, now: I) -> Result<(), EngineError> {
        let actions = self.machine.tick();

        for action in &actions {
            if let TypewriterAction::Schedule { delay } = *action {
                self.timer.arm(now, delay);
            }
        }

        tracing::trace!(text = self.machine.text(), phase = ?self.machine.phase(), "tick");

        for action in actions {
            match action {
                TypewriterAction::Schedule { .. } => {},
                TypewriterAction::Loop { loop_count } => {
                    self.hooks
                        .on_loop(loop_count)
                        .map_err(|source| EngineError::Hook { hook: "on_loop", source })?;
                },
                TypewriterAction::Done => {
                    self.hooks
                        .on_done()
                        .map_err(|source| EngineError::Hook { hook: "on_done", source })?;
                },
            }
        }

        Ok(())
    }

    /// Replace the configuration.
    ///
    /// Cancels the pending deadline and, unless the animation is done,
    /// re-arms it from `now` with the delay recomputed under the new
    /// configuration. A finished engine keeps its configuration. See
    /// [`Typewriter::reconfigure`] for how progress is carried over.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the engine untouched if
    /// `config` is invalid.
    pub fn reconfigure(&mut self, config: TypewriterConfig, now: I) -> Result<(), ConfigError> {
        if let Err(err) = self.machine.reconfigure(config) {
            tracing::warn!(error = %err, "rejected typewriter reconfiguration");
            return Err(err);
        }

        self.timer.cancel();
        if !self.machine.is_done() {
            self.timer.arm(now, self.machine.current_delay());
        }

        Ok(())
    }

    /// Stop the animation: cancel the pending deadline.
    ///
    /// Subsequent polls return the current text without advancing.
    pub fn cancel(&mut self) {
        if self.timer.cancel() {
            tracing::debug!("typewriter tick cancelled");
        }
    }

    /// Current text without advancing.
    pub fn text(&self) -> &str {
        self.machine.text()
    }

    /// Pending deadline. `None` once done or cancelled.
    pub fn deadline(&self) -> Option<I> {
        self.timer.deadline()
    }

    /// Derived animation phase.
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Whether the animation has finished.
    pub fn is_done(&self) -> bool {
        self.machine.is_done()
    }

    /// Index into `words` of the active word.
    pub fn active_index(&self) -> usize {
        self.machine.active_index()
    }

    /// Word currently being typed or deleted.
    pub fn active_word(&self) -> &str {
        self.machine.active_word()
    }

    /// Full animation state.
    pub fn state(&self) -> &AnimationState {
        self.machine.state()
    }

    /// Active configuration.
    pub fn config(&self) -> &TypewriterConfig {
        self.machine.config()
    }

    /// Installed hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Installed hooks, mutably.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }
}

impl<H, I> Drop for Engine<H, I>
where
    I: ClockInstant,
{
    fn drop(&mut self) {
        if self.timer.cancel() {
            tracing::trace!("typewriter dropped with a pending tick");
        }
    }
}
