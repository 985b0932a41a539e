//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during execution. Unlike
//! example-based tests that check specific scenarios, invariants verify
//! behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from an engine into an
//! [`EngineSnapshot`] after every step, then runs registered [`Invariant`]
//! checks against the recorded history.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! history.push(EngineSnapshot::from_engine(&engine));
//! registry.check_all(&history)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    DoneIsTerminal, LoopCountMatchesPasses, LoopCountMonotonic, PrefixOfActiveWord,
    WordIndexMonotonic,
};
pub use snapshot::EngineSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies an invariant in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// See [`PrefixOfActiveWord`].
    PrefixOfActiveWord,
    /// See [`WordIndexMonotonic`].
    WordIndexMonotonic,
    /// See [`LoopCountMonotonic`].
    LoopCountMonotonic,
    /// See [`LoopCountMatchesPasses`].
    LoopCountMatchesPasses,
    /// See [`DoneIsTerminal`].
    DoneIsTerminal,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrefixOfActiveWord => "prefix_of_active_word",
            Self::WordIndexMonotonic => "word_index_monotonic",
            Self::LoopCountMonotonic => "loop_count_monotonic",
            Self::LoopCountMatchesPasses => "loop_count_matches_passes",
            Self::DoneIsTerminal => "done_is_terminal",
        };
        f.write_str(name)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// The violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against an engine's history.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant identity for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against snapshots in chronological order.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against a history.
/// Use [`InvariantRegistry::standard()`] for the common engine invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.kind())).finish()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard engine invariants.
    ///
    /// Includes:
    /// - [`PrefixOfActiveWord`]: text is a prefix of the active word
    /// - [`WordIndexMonotonic`]: word index never decreases
    /// - [`LoopCountMonotonic`]: loop count never decreases or skips
    /// - [`LoopCountMatchesPasses`]: loop count grows once per completed pass
    /// - [`DoneIsTerminal`]: nothing changes after done
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(PrefixOfActiveWord);
        registry.add(WordIndexMonotonic);
        registry.add(LoopCountMonotonic);
        registry.add(LoopCountMatchesPasses);
        registry.add(DoneIsTerminal);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given history.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, history: &[EngineSnapshot]) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(history).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn empty_history_passes_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(registry.check_all(&[]).is_ok());
    }
}
