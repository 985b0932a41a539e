//! Fuzz target for the Engine state machine
//!
//! Arbitrary interleavings of polls, reconfigurations and cancellation
//!
//! # Strategy
//!
//! - Polls: early, late and exactly at the deadline
//! - Reconfigure: random word lists (including empty lists and empty words),
//!   looping toggled, zero speeds
//! - Cancel: at any point, followed by more operations
//!
//! # Invariants
//!
//! - Text is always a prefix of the active word, including after done
//! - Word index and loop count never decrease; loop count grows by at most
//!   one per poll and exactly once per completed pass
//! - Rejected reconfigurations leave the engine untouched
//! - Once done, nothing observable changes, even when reconfigured
//! - NEVER panic

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typewriter_core::{Engine, NoopHooks, TypewriterConfig};
use typewriter_harness::{EngineSnapshot, InvariantRegistry, SimInstant};

#[derive(Debug, Clone, Arbitrary)]
enum EngineOp {
    Poll { advance_ms: u16 },
    PollAtDeadline,
    Reconfigure { words: Vec<WordChoice>, looping: bool, speeds: [u8; 3] },
    Cancel,
}

#[derive(Debug, Clone, Arbitrary)]
enum WordChoice {
    Empty,
    Ascii(u8),
    MultiByte(u8),
}

fuzz_target!(|ops: Vec<EngineOp>| {
    let registry = InvariantRegistry::standard();

    let config = TypewriterConfig::new(["ab", "c"])
        .with_loop(true)
        .with_type_speed(Duration::from_millis(3))
        .with_delete_speed(Duration::from_millis(2))
        .with_delay_speed(Duration::from_millis(5));
    let mut now = SimInstant::ZERO;
    let Ok(mut engine) = Engine::new(config, NoopHooks, now) else {
        panic!("valid config rejected");
    };
    let mut history = vec![EngineSnapshot::from_engine(&engine)];

    for op in ops {
        match op {
            EngineOp::Poll { advance_ms } => {
                now = now + Duration::from_millis(u64::from(advance_ms));
                let _ = engine.poll(now);
            },
            EngineOp::PollAtDeadline => {
                if let Some(deadline) = engine.deadline() {
                    now = now.max(deadline);
                    let _ = engine.poll(now);
                }
            },
            EngineOp::Reconfigure { words, looping, speeds } => {
                let [type_ms, delete_ms, delay_ms] = speeds.map(u64::from);
                let config = TypewriterConfig::new(words.iter().map(word))
                    .with_loop(looping)
                    .with_type_speed(Duration::from_millis(type_ms))
                    .with_delete_speed(Duration::from_millis(delete_ms))
                    .with_delay_speed(Duration::from_millis(delay_ms));
                let valid = config.validate().is_ok();
                let before = engine.state().clone();
                let deadline = engine.deadline();

                let result = engine.reconfigure(config, now);

                assert_eq!(result.is_ok(), valid);
                if !valid {
                    assert_eq!(engine.state(), &before);
                    assert_eq!(engine.deadline(), deadline);
                }
            },
            EngineOp::Cancel => {
                engine.cancel();
                assert_eq!(engine.deadline(), None);
            },
        }

        history.push(EngineSnapshot::from_engine(&engine));

        // Every check compares neighbours, so the latest window is enough
        if let Err(violations) = registry.check_all(&history[history.len() - 2..]) {
            panic!("invariant violation after {} ops: {violations:?}", history.len() - 1);
        }
    }
});

fn word(choice: &WordChoice) -> String {
    match choice {
        WordChoice::Empty => String::new(),
        WordChoice::Ascii(len) => "abcdefgh".chars().take(usize::from(len % 8)).collect(),
        WordChoice::MultiByte(len) => "héllo wörld".chars().take(usize::from(len % 11)).collect(),
    }
}
