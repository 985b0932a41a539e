//! Deterministic simulation harness for typewriter testing.
//!
//! Virtual-time implementations of the [`typewriter_core::Clock`] and
//! [`typewriter_app::Driver`] traits for deterministic, reproducible runs of
//! the engine and the full application runtime.
//!
//! # Scenarios
//!
//! [`Scenario`] steps a single engine deadline by deadline on a [`SimClock`]
//! and records a [`Transcript`] of texts, phases and hook calls.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! engine invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod scenario;
pub mod sim_clock;
pub mod sim_driver;

pub use invariants::{
    DoneIsTerminal, EngineSnapshot, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    LoopCountMatchesPasses, LoopCountMonotonic, PrefixOfActiveWord, Violation,
    WordIndexMonotonic,
};
pub use scenario::{HookCall, RecordingHooks, Scenario, ScenarioError, Step, Transcript};
pub use sim_clock::{SimClock, SimInstant};
pub use sim_driver::{RenderedFrame, SimDriver, SimDriverError};
