//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`typewriter_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Input is a script of events at virtual times. Waiting for the next event
//! advances the [`SimClock`] to whichever comes first, the engine deadline or
//! the next scripted event, so runs are instant and reproducible.

use std::{collections::VecDeque, fmt};

use typewriter_app::{App, AppEvent, Driver};
use typewriter_core::Clock;

use crate::{
    invariants::{EngineSnapshot, InvariantRegistry, Violation},
    sim_clock::{SimClock, SimInstant},
};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub enum SimDriverError {
    /// No deadline is pending and the script is exhausted, so the runtime
    /// would wait forever.
    Stalled {
        /// Virtual time the run stalled at.
        at: SimInstant,
    },
    /// A rendered state violated registered invariants.
    Invariant(Vec<Violation>),
}

impl fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled { at } => write!(f, "SimDriverError: stalled at {at}"),
            Self::Invariant(violations) => {
                write!(f, "SimDriverError: {} invariant violation(s)", violations.len())?;
                for violation in violations {
                    write!(f, "\n  {violation}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for SimDriverError {}

/// A frame the runtime asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Virtual time of the render.
    pub at: SimInstant,
    /// Fragment as displayed: text followed by the cursor glyph.
    pub content: String,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`typewriter_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
pub struct SimDriver {
    clock: SimClock,
    script: VecDeque<(SimInstant, AppEvent)>,
    frames: Vec<RenderedFrame>,
    history: Vec<EngineSnapshot>,
    invariants: Option<InvariantRegistry>,
    stopped: bool,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new(SimClock::new())
    }
}

impl SimDriver {
    /// Create a new simulation driver on `clock`.
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            script: VecDeque::new(),
            frames: Vec::new(),
            history: Vec::new(),
            invariants: None,
            stopped: false,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Script `event` to arrive at `at`.
    ///
    /// Events are delivered in time order; events at the same time keep
    /// insertion order.
    pub fn inject_event(&mut self, at: SimInstant, event: AppEvent) {
        let index = self.script.partition_point(|(t, _)| *t <= at);
        self.script.insert(index, (at, event));
    }

    /// Check if there are scripted events left.
    pub fn has_pending(&self) -> bool {
        !self.script.is_empty()
    }

    /// Every frame rendered so far.
    pub fn frames(&self) -> &[RenderedFrame] {
        &self.frames
    }

    /// Rendered contents in order, without timestamps.
    pub fn contents(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.content.as_str()).collect()
    }

    /// Engine snapshot per render.
    pub fn history(&self) -> &[EngineSnapshot] {
        &self.history
    }

    /// Virtual clock driving this simulation.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;
    type Instant = SimInstant;

    async fn poll_event(&mut self, deadline: Option<SimInstant>) -> Result<AppEvent, Self::Error> {
        let next_scripted = self.script.front().map(|(at, _)| *at);

        match (deadline, next_scripted) {
            // A deadline wins ties with input
            (Some(deadline), Some(at)) if deadline <= at => {
                self.clock.sleep_until(deadline).await;
                Ok(AppEvent::Tick)
            },
            (Some(deadline), None) => {
                self.clock.sleep_until(deadline).await;
                Ok(AppEvent::Tick)
            },
            (_, Some(_)) => {
                let Some((at, event)) = self.script.pop_front() else {
                    return Err(SimDriverError::Stalled { at: self.clock.now() });
                };
                self.clock.advance_to(at);
                Ok(event)
            },
            (None, None) => Err(SimDriverError::Stalled { at: self.clock.now() }),
        }
    }

    fn now(&self) -> Self::Instant {
        self.clock.now()
    }

    fn render(&mut self, app: &App<SimInstant>) -> Result<(), Self::Error> {
        self.frames
            .push(RenderedFrame { at: self.clock.now(), content: app.frame().to_string() });
        self.history.push(EngineSnapshot::from_engine(app.view().engine()));

        if let Some(registry) = &self.invariants {
            registry.check_all(&self.history).map_err(SimDriverError::Invariant)?;
        }
        Ok(())
    }

    fn stop(&mut self) {
        tracing::debug!(frames = self.frames.len(), at = %self.clock.now(), "sim driver stopped");
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use typewriter_app::KeyInput;

    use super::*;

    #[tokio::test]
    async fn deadline_before_input_ticks() {
        let mut driver = SimDriver::default();
        driver.inject_event(SimInstant::from_millis(50), AppEvent::Key(KeyInput::Char('q')));

        let event = driver.poll_event(Some(SimInstant::from_millis(10))).await.unwrap();

        assert_eq!(event, AppEvent::Tick);
        assert_eq!(driver.now(), SimInstant::from_millis(10));
        assert!(driver.has_pending());
    }

    #[tokio::test]
    async fn input_before_deadline_is_delivered() {
        let mut driver = SimDriver::default();
        driver.inject_event(SimInstant::from_millis(5), AppEvent::Resize(100, 30));

        let event = driver.poll_event(Some(SimInstant::from_millis(10))).await.unwrap();

        assert_eq!(event, AppEvent::Resize(100, 30));
        assert_eq!(driver.now(), SimInstant::from_millis(5));
    }

    #[tokio::test]
    async fn events_are_ordered_by_time() {
        let mut driver = SimDriver::default();
        driver.inject_event(SimInstant::from_millis(20), AppEvent::Key(KeyInput::Esc));
        driver.inject_event(SimInstant::from_millis(10), AppEvent::Key(KeyInput::Char('x')));

        assert_eq!(driver.poll_event(None).await.unwrap(), AppEvent::Key(KeyInput::Char('x')));
        assert_eq!(driver.poll_event(None).await.unwrap(), AppEvent::Key(KeyInput::Esc));
    }

    #[tokio::test]
    async fn nothing_left_stalls() {
        let mut driver = SimDriver::default();

        let result = driver.poll_event(None).await;

        assert!(matches!(result, Err(SimDriverError::Stalled { .. })));
    }
}
