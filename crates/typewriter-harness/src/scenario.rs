//! Scenario runner.
//!
//! Steps a single engine on a [`SimClock`], jumping from deadline to
//! deadline, and records every tick as a [`Step`]. The resulting
//! [`Transcript`] is what scenario and property tests assert on.

use std::fmt;

use typewriter_core::{
    Clock, ConfigError, Engine, EngineError, HookError, Hooks, Phase, TypewriterConfig,
};

use crate::{
    invariants::{EngineSnapshot, InvariantRegistry, Violation},
    sim_clock::{SimClock, SimInstant},
};

/// A hook invocation observed during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCall {
    /// `on_loop(loop_count)`
    Loop(u32),
    /// `on_done()`
    Done,
}

impl fmt::Display for HookCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loop(loop_count) => write!(f, "on_loop({loop_count})"),
            Self::Done => f.write_str("on_done()"),
        }
    }
}

/// Hooks that record every call.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    calls: Vec<HookCall>,
}

impl RecordingHooks {
    /// Hooks with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> &[HookCall] {
        &self.calls
    }

    /// Drain recorded calls.
    pub fn take(&mut self) -> Vec<HookCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Hooks for RecordingHooks {
    fn on_loop(&mut self, loop_count: u32) -> Result<(), HookError> {
        self.calls.push(HookCall::Loop(loop_count));
        Ok(())
    }

    fn on_done(&mut self) -> Result<(), HookError> {
        self.calls.push(HookCall::Done);
        Ok(())
    }
}

/// State after one tick. Tick 0 is the initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based tick number.
    pub tick: usize,
    /// Virtual time the tick fired.
    pub at: SimInstant,
    /// Text after the tick.
    pub text: String,
    /// Phase after the tick.
    pub phase: Phase,
    /// Hooks fired by the tick.
    pub hooks: Vec<HookCall>,
}

/// Everything a scenario run observed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// One entry per tick, starting with the initial state.
    pub steps: Vec<Step>,
    /// Engine snapshot per step, for invariant checks.
    pub history: Vec<EngineSnapshot>,
}

impl Transcript {
    /// Distinct visible texts in order, collapsing ticks that did not
    /// change the text.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts: Vec<&str> = self.steps.iter().map(|step| step.text.as_str()).collect();
        texts.dedup();
        texts
    }

    /// Every hook call with the tick that fired it.
    pub fn hook_calls(&self) -> Vec<(usize, HookCall)> {
        self.steps
            .iter()
            .flat_map(|step| step.hooks.iter().map(move |call| (step.tick, *call)))
            .collect()
    }

    /// Number of ticks fired.
    pub fn ticks(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Text after the last tick.
    pub fn final_text(&self) -> &str {
        self.steps.last().map_or("", |step| step.text.as_str())
    }

    /// Whether the run ended with the animation done.
    pub fn is_done(&self) -> bool {
        self.steps.last().is_some_and(|step| step.phase == Phase::Done)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            let at = step.at.to_string();
            let phase = format!("{:?}", step.phase);
            write!(f, "{:02} {at:>8} {phase:<8} {:?}", step.tick, step.text)?;
            for call in &step.hooks {
                write!(f, " {call}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors from a scenario run.
#[derive(Debug)]
pub enum ScenarioError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A hook failed.
    Engine(EngineError),
    /// Invariants were violated.
    Invariant(Vec<Violation>),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "scenario config rejected: {e}"),
            Self::Engine(e) => write!(f, "scenario engine failed: {e}"),
            Self::Invariant(violations) => {
                writeln!(f, "{} invariant violation(s):", violations.len())?;
                for violation in violations {
                    writeln!(f, "  {violation}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<ConfigError> for ScenarioError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<EngineError> for ScenarioError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

/// Deterministic run of one configuration.
#[derive(Debug)]
pub struct Scenario {
    config: TypewriterConfig,
    invariants: Option<InvariantRegistry>,
    max_ticks: usize,
}

impl Scenario {
    /// Default tick budget. Looping animations never finish on their own.
    pub const DEFAULT_MAX_TICKS: usize = 1_000;

    /// Scenario for `config`.
    pub fn new(config: TypewriterConfig) -> Self {
        Self { config, invariants: None, max_ticks: Self::DEFAULT_MAX_TICKS }
    }

    /// Check these invariants against the recorded history.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Stop after `max_ticks` ticks even if the animation is still running.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Run until done or the tick budget is spent.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any registered
    /// invariant is violated.
    pub fn run(&self) -> Result<Transcript, ScenarioError> {
        let clock = SimClock::new();
        let mut engine = Engine::new(self.config.clone(), RecordingHooks::new(), clock.now())?;
        let mut transcript = Transcript::default();
        record(&mut transcript, &mut engine, 0, clock.now());

        for tick in 1..=self.max_ticks {
            let Some(deadline) = engine.deadline() else { break };
            clock.advance_to(deadline);
            engine.poll(clock.now())?;
            record(&mut transcript, &mut engine, tick, clock.now());
        }

        tracing::debug!(
            ticks = transcript.ticks(),
            done = transcript.is_done(),
            "scenario finished"
        );

        if let Some(registry) = &self.invariants {
            registry.check_all(&transcript.history).map_err(ScenarioError::Invariant)?;
        }

        Ok(transcript)
    }
}

fn record(
    transcript: &mut Transcript,
    engine: &mut Engine<RecordingHooks, SimInstant>,
    tick: usize,
    at: SimInstant,
) {
    let hooks = engine.hooks_mut().take();
    transcript.steps.push(Step {
        tick,
        at,
        text: engine.text().to_string(),
        phase: engine.phase(),
        hooks,
    });
    transcript.history.push(EngineSnapshot::from_engine(engine));
}
