//! Property-based tests for the typewriter engine.
//!
//! Tests verify that invariants hold for arbitrary word lists and speeds,
//! and that the text sequence is exactly the typed and deleted prefixes.

use std::time::Duration;

use proptest::prelude::*;
use typewriter_core::{Engine, NoopHooks, TypewriterConfig};
use typewriter_harness::{HookCall, InvariantRegistry, Scenario, SimInstant};

/// Short words, possibly empty, including a multi-byte character.
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abé]{0,5}", 1..4)
}

fn speed_strategy() -> impl Strategy<Value = Duration> {
    (1u64..200).prop_map(Duration::from_millis)
}

fn config_strategy() -> impl Strategy<Value = TypewriterConfig> {
    let speeds = (speed_strategy(), speed_strategy(), speed_strategy());
    (words_strategy(), any::<bool>(), speeds).prop_map(
        |(words, looping, (type_speed, delete_speed, delay_speed))| {
            TypewriterConfig::new(words)
                .with_loop(looping)
                .with_type_speed(type_speed)
                .with_delete_speed(delete_speed)
                .with_delay_speed(delay_speed)
        },
    )
}

/// Every prefix of `word` by character, from one character to the whole.
fn prefixes(word: &str) -> Vec<String> {
    word.char_indices().map(|(i, c)| word[..i + c.len_utf8()].to_string()).collect()
}

/// Ticks for one word in a looping pass: type, pause, delete, advance.
fn ticks_per_word(word: &str) -> usize {
    2 * word.chars().count() + 2
}

proptest! {
    /// Standard invariants hold for arbitrary configurations.
    #[test]
    fn prop_invariants_hold(config in config_strategy()) {
        let result = Scenario::new(config)
            .with_invariants(InvariantRegistry::standard())
            .with_max_ticks(200)
            .run();

        prop_assert!(result.is_ok(), "{}", result.err().map(|e| e.to_string()).unwrap_or_default());
    }

    /// Without looping the text visits every prefix of each word, shrinks
    /// back to empty between words, and stops on the last word.
    #[test]
    fn prop_non_looping_visits_every_prefix(words in words_strategy()) {
        let config = TypewriterConfig::new(words.clone());
        let transcript = Scenario::new(config).run().unwrap();

        let mut expected = vec![String::new()];
        for (index, word) in words.iter().enumerate() {
            let typed = prefixes(word);
            expected.extend(typed.iter().cloned());
            if index + 1 < words.len() {
                expected.extend(typed.iter().rev().skip(1).cloned());
                expected.push(String::new());
            }
        }
        expected.dedup();

        prop_assert_eq!(transcript.texts(), expected);
        prop_assert!(transcript.is_done());
        prop_assert_eq!(transcript.final_text(), words[words.len() - 1].as_str());
        prop_assert_eq!(transcript.hook_calls(), vec![(transcript.ticks(), HookCall::Done)]);
    }

    /// Looping fires `on_loop(1..=k)` in order, exactly once per pass.
    #[test]
    fn prop_looping_counts_passes(words in words_strategy(), passes in 1usize..4) {
        let pass_ticks: usize = words.iter().map(|word| ticks_per_word(word)).sum();
        let config = TypewriterConfig::new(words).with_loop(true);
        let transcript = Scenario::new(config).with_max_ticks(pass_ticks * passes).run().unwrap();

        let expected: Vec<_> = (1..=passes)
            .map(|k| (k * pass_ticks, HookCall::Loop(u32::try_from(k).unwrap())))
            .collect();
        prop_assert_eq!(transcript.hook_calls(), expected);
        prop_assert!(!transcript.is_done());
    }

    /// Polling before the deadline changes neither the text nor the
    /// deadline.
    #[test]
    fn prop_poll_idempotent_before_deadline(
        config in config_strategy(),
        steps in prop::collection::vec(0u64..150, 1..60),
    ) {
        let mut now = SimInstant::ZERO;
        let mut engine = Engine::new(config, NoopHooks, now).unwrap();

        for step in steps {
            now = now + Duration::from_millis(step);
            let before = engine.text().to_string();
            let deadline = engine.deadline();

            let text = engine.poll(now).unwrap().to_string();

            if deadline.is_none_or(|deadline| now < deadline) {
                prop_assert_eq!(text, before);
                prop_assert_eq!(engine.deadline(), deadline);
            }
        }
    }
}
