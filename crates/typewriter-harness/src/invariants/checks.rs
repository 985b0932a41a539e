//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use super::{EngineSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Visible text must be a prefix of the active word.
///
/// Typing only appends the next character of the word and deleting only
/// removes the last one, so the text can never diverge from the word.
pub struct PrefixOfActiveWord;

impl Invariant for PrefixOfActiveWord {
    fn kind(&self) -> InvariantKind {
        InvariantKind::PrefixOfActiveWord
    }

    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult {
        for (step, snapshot) in history.iter().enumerate() {
            if !snapshot.active_word.starts_with(&snapshot.displayed) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "step {step}: {:?} is not a prefix of {:?}",
                        snapshot.displayed, snapshot.active_word
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Word index must never decrease.
pub struct WordIndexMonotonic;

impl Invariant for WordIndexMonotonic {
    fn kind(&self) -> InvariantKind {
        InvariantKind::WordIndexMonotonic
    }

    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult {
        for (step, window) in history.windows(2).enumerate() {
            if window[1].word_index < window[0].word_index {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "step {}: word_index decreased {} → {}",
                        step + 1,
                        window[0].word_index,
                        window[1].word_index
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Loop count must never decrease, and grows by at most one per step.
pub struct LoopCountMonotonic;

impl Invariant for LoopCountMonotonic {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LoopCountMonotonic
    }

    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult {
        for (step, window) in history.windows(2).enumerate() {
            let (before, after) = (window[0].loop_count, window[1].loop_count);
            if after < before || after > before + 1 {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("step {}: loop_count jumped {before} → {after}", step + 1),
                });
            }
        }
        Ok(())
    }
}

/// Loop count must grow by exactly the number of passes completed.
///
/// Between two snapshots under the same word count and looping flag, the
/// loop count advances by the number of multiples of `word_count` that
/// `word_index` crossed, or not at all when not looping. Steps across a
/// reconfiguration that changes either are skipped: progress is carried
/// over but passes restart counting against the new word list.
pub struct LoopCountMatchesPasses;

impl Invariant for LoopCountMatchesPasses {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LoopCountMatchesPasses
    }

    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult {
        for (step, window) in history.windows(2).enumerate() {
            let (before, after) = (&window[0], &window[1]);
            if before.word_count != after.word_count || before.looping != after.looping {
                continue;
            }

            let passes = if after.looping {
                let words = after.word_count.max(1);
                after.word_index / words - before.word_index / words
            } else {
                0
            };
            let grown = after.loop_count.saturating_sub(before.loop_count) as usize;
            if after.loop_count < before.loop_count || grown != passes {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "step {}: loop_count {} → {} over {passes} passes (word_index {} → {})",
                        step + 1,
                        before.loop_count,
                        after.loop_count,
                        before.word_index,
                        after.word_index,
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Once done, nothing observable changes again.
pub struct DoneIsTerminal;

impl Invariant for DoneIsTerminal {
    fn kind(&self) -> InvariantKind {
        InvariantKind::DoneIsTerminal
    }

    fn check(&self, history: &[EngineSnapshot]) -> InvariantResult {
        let Some(first_done) = history.iter().position(EngineSnapshot::is_done) else {
            return Ok(());
        };

        let done = &history[first_done];
        for (offset, later) in history[first_done..].iter().enumerate() {
            if later != done {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "step {}: state changed after done: {done:?} → {later:?}",
                        first_done + offset
                    ),
                });
            }
        }
        Ok(())
    }
}
