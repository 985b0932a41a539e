//! Typewriter state machine.
//!
//! Computes the visible text one transition at a time. Uses the action
//! pattern: [`Typewriter::tick`] mutates state and returns actions for the
//! caller to execute (arm the next deadline, run hooks). No time, no I/O.
//!
//! # State Machine
//!
//! ```text
//!            char typed (type_speed)
//!              ┌──────┐
//!              │      ↓
//!          ┌────────────┐  word typed, more to come  ┌─────────┐
//!   ──────>│   Typing   │───────────────────────────>│ Pausing │
//!          └────────────┘        (delay_speed)       └─────────┘
//!             ↑     │                                     │
//!  emptied:   │     │ last word typed, not looping        │ first delete
//!  next word  │     ↓                                     ↓ (delete_speed)
//!  (+on_loop) │  ┌──────┐                            ┌──────────┐
//!             │  │ Done │                            │ Deleting │──┐ char deleted
//!             │  └──────┘                            └──────────┘<─┘ (delete_speed)
//!             └──────────────────────────────────────────────┘
//! ```
//!
//! Only `displayed`, `deleting`, `word_index`, `loop_count`, `current_delay`
//! and `done` are stored; [`Phase`] is derived from them.

use std::time::Duration;

use crate::{config::TypewriterConfig, error::ConfigError};

/// Actions returned by [`Typewriter::tick`].
///
/// `Schedule` always comes first so the caller can re-arm before running
/// any hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterAction {
    /// Arm the next tick after this delay
    Schedule {
        /// Delay before the next tick
        delay: Duration,
    },

    /// A full pass completed; invoke `on_loop`
    Loop {
        /// 1-based number of completed passes
        loop_count: u32,
    },

    /// The animation finished; invoke `on_done` and schedule nothing
    Done,
}

/// Observable animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Extending the text toward the active word
    Typing,
    /// Word fully typed, waiting `delay_speed` before deleting
    Pausing,
    /// Removing trailing characters
    Deleting,
    /// Terminal; no further ticks
    Done,
}

/// Mutable animation state, owned by exactly one [`Typewriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    displayed: String,
    deleting: bool,
    word_index: usize,
    loop_count: u32,
    current_delay: Duration,
    done: bool,
}

impl AnimationState {
    fn new(first_delay: Duration) -> Self {
        Self {
            displayed: String::new(),
            deleting: false,
            word_index: 0,
            loop_count: 0,
            current_delay: first_delay,
            done: false,
        }
    }

    /// Currently visible text. Always a prefix of the active word.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Whether characters are being removed.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Number of words started so far, minus one. Never decreases.
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// Completed passes through the word list. Never decreases.
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    /// Delay armed after the most recent transition.
    pub fn current_delay(&self) -> Duration {
        self.current_delay
    }

    /// Whether the animation has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Typewriter state machine.
///
/// Pure: every transition happens inside [`Typewriter::tick`], and the
/// caller decides when that is.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    state: AnimationState,
}

impl Typewriter {
    /// Create a machine at the start of the first word.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(config: TypewriterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = AnimationState::new(config.type_speed);
        Ok(Self { config, state })
    }

    /// Active configuration.
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Currently visible text.
    pub fn text(&self) -> &str {
        &self.state.displayed
    }

    /// Delay to wait before the next tick.
    pub fn current_delay(&self) -> Duration {
        self.state.current_delay
    }

    /// Whether the animation has finished.
    pub fn is_done(&self) -> bool {
        self.state.done
    }

    /// Index into `words` of the active word.
    ///
    /// Without looping the index is clamped to the last word, which only
    /// matters after `looping` was switched off by a reconfiguration.
    pub fn active_index(&self) -> usize {
        let count = self.config.words.len();
        if self.config.looping {
            self.state.word_index % count
        } else {
            self.state.word_index.min(count.saturating_sub(1))
        }
    }

    /// Word currently being typed or deleted.
    pub fn active_word(&self) -> &str {
        self.config.words.get(self.active_index()).map_or("", String::as_str)
    }

    /// Derived phase.
    pub fn phase(&self) -> Phase {
        if self.state.done {
            Phase::Done
        } else if !self.state.deleting {
            Phase::Typing
        } else if self.state.displayed.len() == self.active_word().len() {
            Phase::Pausing
        } else {
            Phase::Deleting
        }
    }

    /// Perform exactly one transition.
    ///
    /// Returns nothing once done. Otherwise returns `Schedule` first,
    /// followed by `Loop` when a pass completed, or only `Done` when the
    /// animation just finished.
    pub fn tick(&mut self) -> Vec<TypewriterAction> {
        if self.state.done {
            return Vec::new();
        }

        if !self.state.deleting {
            return self.tick_typing();
        }

        if self.state.displayed.pop().is_some() {
            self.state.current_delay = self.config.delete_speed;
            return vec![TypewriterAction::Schedule { delay: self.state.current_delay }];
        }

        self.advance()
    }

    fn tick_typing(&mut self) -> Vec<TypewriterAction> {
        let shown = self.state.displayed.len();
        let next = self.active_word().get(shown..).and_then(|rest| rest.chars().next());

        if let Some(c) = next {
            self.state.displayed.push(c);
            self.state.current_delay = self.config.type_speed;
            return vec![TypewriterAction::Schedule { delay: self.state.current_delay }];
        }

        let last_index = self.config.words.len() - 1;
        if !self.config.looping && self.state.word_index >= last_index {
            self.state.done = true;
            tracing::debug!(word_index = self.state.word_index, "typewriter done");
            return vec![TypewriterAction::Done];
        }

        self.state.deleting = true;
        self.state.current_delay = self.config.delay_speed;
        tracing::trace!(word = self.active_word(), "word typed, pausing");
        vec![TypewriterAction::Schedule { delay: self.state.current_delay }]
    }

    /// Deleting reached the empty string: move to the next word.
    fn advance(&mut self) -> Vec<TypewriterAction> {
        self.state.deleting = false;
        self.state.word_index += 1;
        self.state.current_delay = self.config.type_speed;

        let mut actions = vec![TypewriterAction::Schedule { delay: self.state.current_delay }];

        if self.config.looping && self.state.word_index % self.config.words.len() == 0 {
            self.state.loop_count += 1;
            tracing::debug!(loop_count = self.state.loop_count, "typewriter pass complete");
            actions.push(TypewriterAction::Loop { loop_count: self.state.loop_count });
        }

        actions
    }

    /// Replace the configuration, keeping progress.
    ///
    /// Counters are preserved. The visible text is cut back to the longest
    /// common prefix with the new active word, and the pending delay is
    /// recomputed from the new speeds for the current phase.
    ///
    /// A finished animation is frozen: `config` is still validated but not
    /// applied, so the final text stays a prefix of the final word.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the machine untouched if
    /// `config` is invalid.
    pub fn reconfigure(&mut self, config: TypewriterConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if self.state.done {
            tracing::debug!(text = %self.state.displayed, "animation finished, keeping config");
            return Ok(());
        }

        self.config = config;

        let common: usize = self
            .state
            .displayed
            .chars()
            .zip(self.active_word().chars())
            .take_while(|(shown, wanted)| shown == wanted)
            .map(|(c, _)| c.len_utf8())
            .sum();
        self.state.displayed.truncate(common);

        self.state.current_delay = match self.phase() {
            Phase::Typing | Phase::Done => self.config.type_speed,
            Phase::Pausing => self.config.delay_speed,
            Phase::Deleting => self.config.delete_speed,
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn machine(words: &[&str], looping: bool) -> Typewriter {
        let config = TypewriterConfig::new(words.iter().copied())
            .with_loop(looping)
            .with_type_speed(ms(10))
            .with_delete_speed(ms(5))
            .with_delay_speed(ms(100));
        Typewriter::new(config).unwrap()
    }

    #[test]
    fn starts_empty_typing_with_type_speed() {
        let tw = machine(&["Hi"], false);

        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.current_delay(), ms(10));
        assert_eq!(tw.active_word(), "Hi");
    }

    #[test]
    fn rejects_empty_words() {
        let config = TypewriterConfig::new(Vec::<String>::new());
        assert!(matches!(Typewriter::new(config), Err(ConfigError::EmptyWords)));
    }

    #[test]
    fn single_word_without_loop_finishes_without_deleting() {
        let mut tw = machine(&["Hi"], false);

        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(10) }]);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(10) }]);
        assert_eq!(tw.text(), "Hi");

        assert_eq!(tw.tick(), vec![TypewriterAction::Done]);
        assert_eq!(tw.phase(), Phase::Done);
        assert_eq!(tw.text(), "Hi");

        // Terminal: nothing else happens
        assert!(tw.tick().is_empty());
        assert_eq!(tw.text(), "Hi");
    }

    #[test]
    fn pause_then_delete_then_advance() {
        let mut tw = machine(&["ab", "c"], false);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "ab");

        // Word complete: pause before deleting
        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(100) }]);
        assert_eq!(tw.phase(), Phase::Pausing);
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(5) }]);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.phase(), Phase::Deleting);
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.state().word_index(), 0);

        // Emptied: advance without touching the text
        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(10) }]);
        assert_eq!(tw.state().word_index(), 1);
        assert_eq!(tw.active_word(), "c");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn looping_emits_loop_when_index_wraps() {
        let mut tw = machine(&["a"], true);

        tw.tick(); // "a"
        tw.tick(); // pause
        tw.tick(); // ""
        let actions = tw.tick(); // advance

        assert_eq!(actions, vec![
            TypewriterAction::Schedule { delay: ms(10) },
            TypewriterAction::Loop { loop_count: 1 }
        ]);
        assert_eq!(tw.state().loop_count(), 1);
        assert_eq!(tw.state().word_index(), 1);
        assert_eq!(tw.active_word(), "a");
    }

    #[test]
    fn empty_word_completes_immediately() {
        let mut tw = machine(&["", "x"], false);

        // No typing ticks: first tick already sees a complete word
        assert_eq!(tw.tick(), vec![TypewriterAction::Schedule { delay: ms(100) }]);
        assert_eq!(tw.phase(), Phase::Pausing);

        // No deleting ticks either
        tw.tick();
        assert_eq!(tw.state().word_index(), 1);
        assert_eq!(tw.active_word(), "x");
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let mut tw = machine(&["héé"], false);

        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
        tw.tick();
        assert_eq!(tw.text(), "héé");
    }

    #[test]
    fn reconfigure_clamps_text_to_common_prefix() {
        let mut tw = machine(&["hello"], false);
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.text(), "hell");

        let config = TypewriterConfig::new(["help"]).with_type_speed(ms(42));
        tw.reconfigure(config).unwrap();

        assert_eq!(tw.text(), "hel");
        assert_eq!(tw.current_delay(), ms(42));
        tw.tick();
        assert_eq!(tw.text(), "help");
    }

    #[test]
    fn reconfigure_rejects_invalid_and_keeps_state() {
        let mut tw = machine(&["abc"], false);
        tw.tick();

        let bad = TypewriterConfig::new(["abc"]).with_type_speed(Duration::ZERO);
        assert!(tw.reconfigure(bad).is_err());
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.current_delay(), ms(10));
    }

    #[test]
    fn reconfigure_after_done_stays_done() {
        let mut tw = machine(&["a"], false);
        tw.tick();
        tw.tick();
        assert!(tw.is_done());

        tw.reconfigure(TypewriterConfig::new(["a", "b"]).with_loop(true)).unwrap();
        assert!(tw.is_done());
        assert!(tw.tick().is_empty());
    }

    #[test]
    fn reconfigure_after_done_keeps_final_word() {
        let mut tw = machine(&["Hi"], false);
        for _ in 0..3 {
            tw.tick();
        }
        assert!(tw.is_done());

        tw.reconfigure(TypewriterConfig::new(["Yo"])).unwrap();

        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.active_word(), "Hi");
        assert!(tw.active_word().starts_with(tw.text()));
        assert_eq!(tw.config().words, vec!["Hi".to_string()]);
    }

    #[test]
    fn reconfigure_after_done_still_validates() {
        let mut tw = machine(&["a"], false);
        tw.tick();
        tw.tick();

        let bad = TypewriterConfig::new(Vec::<String>::new());
        assert_eq!(tw.reconfigure(bad), Err(ConfigError::EmptyWords));
    }
}
