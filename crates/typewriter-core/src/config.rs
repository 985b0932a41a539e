//! Animation configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Delay between typed characters.
pub const DEFAULT_TYPE_SPEED: Duration = Duration::from_millis(100);

/// Delay between deleted characters.
pub const DEFAULT_DELETE_SPEED: Duration = Duration::from_millis(50);

/// Pause between a fully typed word and the start of its deletion.
pub const DEFAULT_DELAY_SPEED: Duration = Duration::from_millis(1500);

/// Typewriter configuration.
///
/// Immutable for the lifetime of an engine; replacing it goes through
/// [`crate::Engine::reconfigure`]. Lifecycle callbacks are not part of the
/// configuration, see [`crate::Hooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Words to type, in order. Must not be empty; duplicates are fine.
    pub words: Vec<String>,
    /// Cycle through `words` forever instead of stopping after the last one
    pub looping: bool,
    /// Delay after each typed character
    pub type_speed: Duration,
    /// Delay after each deleted character
    pub delete_speed: Duration,
    /// Pause before a fully typed word starts being deleted
    pub delay_speed: Duration,
}

impl TypewriterConfig {
    /// Configuration for `words` with default speeds and no looping.
    pub fn new<W, S>(words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            looping: false,
            type_speed: DEFAULT_TYPE_SPEED,
            delete_speed: DEFAULT_DELETE_SPEED,
            delay_speed: DEFAULT_DELAY_SPEED,
        }
    }

    /// Enable or disable looping.
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the per-character typing delay.
    #[must_use]
    pub fn with_type_speed(mut self, speed: Duration) -> Self {
        self.type_speed = speed;
        self
    }

    /// Set the per-character deletion delay.
    #[must_use]
    pub fn with_delete_speed(mut self, speed: Duration) -> Self {
        self.delete_speed = speed;
        self
    }

    /// Set the pause before deletion starts.
    #[must_use]
    pub fn with_delay_speed(mut self, speed: Duration) -> Self {
        self.delay_speed = speed;
        self
    }

    /// Check the configuration can drive an animation.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EmptyWords` if `words` is empty
    /// - `ConfigError::NonPositiveSpeed` if any speed is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWords);
        }

        let speeds = [
            ("type_speed", self.type_speed),
            ("delete_speed", self.delete_speed),
            ("delay_speed", self.delay_speed),
        ];
        if let Some((field, _)) = speeds.into_iter().find(|(_, speed)| speed.is_zero()) {
            return Err(ConfigError::NonPositiveSpeed { field });
        }

        Ok(())
    }
}
