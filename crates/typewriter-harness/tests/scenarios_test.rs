//! Scenario tests for the typewriter engine.
//!
//! Each test runs one configuration on virtual time and checks the exact
//! sequence of texts, phases and hook calls.

use std::time::Duration;

use insta::assert_snapshot;
use typewriter_core::{Engine, NoopHooks, Phase, TypewriterConfig};
use typewriter_harness::{EngineSnapshot, HookCall, InvariantRegistry, Scenario, SimInstant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn config(words: &[&str], looping: bool) -> TypewriterConfig {
    TypewriterConfig::new(words.iter().copied())
        .with_loop(looping)
        .with_type_speed(ms(10))
        .with_delete_speed(ms(10))
        .with_delay_speed(ms(10))
}

fn run(config: TypewriterConfig, max_ticks: usize) -> typewriter_harness::Transcript {
    Scenario::new(config)
        .with_invariants(InvariantRegistry::standard())
        .with_max_ticks(max_ticks)
        .run()
        .unwrap()
}

#[test]
fn single_word_types_then_finishes() {
    let transcript = run(config(&["Hi"], false), 100);

    assert_eq!(transcript.texts(), vec!["", "H", "Hi"]);
    assert_eq!(transcript.hook_calls(), vec![(3, HookCall::Done)]);
    assert!(transcript.is_done());
    // No deletion after the final word
    assert_eq!(transcript.final_text(), "Hi");
}

#[test]
fn two_words_loop_once() {
    let transcript = run(config(&["Go", "Rs"], true), 13);

    assert_eq!(transcript.texts(), vec!["", "G", "Go", "G", "", "R", "Rs", "R", "", "G"]);
    assert_eq!(transcript.hook_calls(), vec![(12, HookCall::Loop(1))]);
    assert_eq!(transcript.steps[3].phase, Phase::Pausing);
    assert_eq!(transcript.steps[9].phase, Phase::Pausing);
}

#[test]
fn loop_counts_fire_in_order() {
    // One pass over ["ab"] takes 6 ticks
    let transcript = run(config(&["ab"], true), 6 * 4);

    assert_eq!(
        transcript.hook_calls(),
        vec![
            (6, HookCall::Loop(1)),
            (12, HookCall::Loop(2)),
            (18, HookCall::Loop(3)),
            (24, HookCall::Loop(4)),
        ]
    );
}

#[test]
fn non_looping_words_are_deleted_except_the_last() {
    let transcript = run(config(&["ab", "cd"], false), 100);

    assert_eq!(transcript.texts(), vec!["", "a", "ab", "a", "", "c", "cd"]);
    assert_eq!(transcript.hook_calls(), vec![(9, HookCall::Done)]);
}

#[test]
fn empty_word_takes_no_typing_or_deleting_ticks() {
    let transcript = run(config(&["", "a"], false), 100);

    // Pause on the empty word, advance, type "a", done
    assert_eq!(transcript.ticks(), 4);
    assert_eq!(transcript.texts(), vec!["", "a"]);
    assert_eq!(transcript.steps[1].phase, Phase::Pausing);
    assert_eq!(transcript.hook_calls(), vec![(4, HookCall::Done)]);
}

#[test]
fn multibyte_words_type_by_character() {
    let transcript = run(config(&["héé"], false), 100);

    assert_eq!(transcript.texts(), vec!["", "h", "hé", "héé"]);
}

#[test]
fn reconfigured_run_keeps_invariants() {
    fn tick(engine: &mut Engine<NoopHooks, SimInstant>, now: &mut SimInstant) {
        *now = engine.deadline().unwrap();
        engine.poll(*now).unwrap();
    }

    let mut now = SimInstant::ZERO;
    let mut engine = Engine::new(config(&["ab"], true), NoopHooks, now).unwrap();
    let mut history = vec![EngineSnapshot::from_engine(&engine)];

    // One full pass plus the first character of the next
    for _ in 0..7 {
        tick(&mut engine, &mut now);
        history.push(EngineSnapshot::from_engine(&engine));
    }
    assert_eq!(engine.text(), "a");
    assert_eq!(engine.state().loop_count(), 1);

    engine.reconfigure(config(&["ab", "cd", "ef"], true), now).unwrap();
    history.push(EngineSnapshot::from_engine(&engine));
    assert_eq!(engine.active_word(), "cd");
    assert_eq!(engine.text(), "");

    // "cd" and "ef" each take 6 ticks, wrapping word_index to 3
    for _ in 0..12 {
        tick(&mut engine, &mut now);
        history.push(EngineSnapshot::from_engine(&engine));
    }

    assert_eq!(engine.state().word_index(), 3);
    assert_eq!(engine.state().loop_count(), 2);
    InvariantRegistry::standard().check_all(&history).unwrap();
}

#[test]
fn transcript_follows_each_speed() {
    let config = TypewriterConfig::new(["Go", "Rs"])
        .with_loop(true)
        .with_type_speed(ms(10))
        .with_delete_speed(ms(5))
        .with_delay_speed(ms(100));
    let transcript = Scenario::new(config).with_max_ticks(13).run().unwrap();

    assert_snapshot!(transcript.to_string(), @r#"
    00     +0ms Typing   ""
    01    +10ms Typing   "G"
    02    +20ms Typing   "Go"
    03    +30ms Pausing  "Go"
    04   +130ms Deleting "G"
    05   +135ms Deleting ""
    06   +140ms Typing   ""
    07   +150ms Typing   "R"
    08   +160ms Typing   "Rs"
    09   +170ms Pausing  "Rs"
    10   +270ms Deleting "R"
    11   +275ms Deleting ""
    12   +280ms Typing   "" on_loop(1)
    13   +290ms Typing   "G"
    "#);
}
