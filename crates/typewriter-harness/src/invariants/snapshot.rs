//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of an engine at a point in time.
//! Invariants operate on a history of snapshots rather than live state, so
//! properties over time (monotonic counters, terminal states) can be checked
//! the same way as properties of a single moment.

use typewriter_core::{ClockInstant, Engine, Hooks, Phase};

/// Snapshot of one engine's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    /// Visible text.
    pub displayed: String,
    /// Word being typed or deleted.
    pub active_word: String,
    /// Words started so far (unbounded).
    pub word_index: usize,
    /// Completed passes.
    pub loop_count: u32,
    /// Derived phase.
    pub phase: Phase,
    /// Number of configured words.
    pub word_count: usize,
    /// Whether the configuration loops.
    pub looping: bool,
}

impl EngineSnapshot {
    /// Capture the state of `engine`.
    pub fn from_engine<H, I>(engine: &Engine<H, I>) -> Self
    where
        H: Hooks,
        I: ClockInstant,
    {
        let state = engine.state();
        Self {
            displayed: state.displayed().to_string(),
            active_word: engine.active_word().to_string(),
            word_index: state.word_index(),
            loop_count: state.loop_count(),
            phase: engine.phase(),
            word_count: engine.config().words.len(),
            looping: engine.config().looping,
        }
    }

    /// Whether the animation has finished.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}
