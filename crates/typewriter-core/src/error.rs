//! Error types for the typewriter engine.
//!
//! Two layers: [`ConfigError`] rejects a configuration before any state is
//! built or replaced, [`EngineError`] is what a running engine can report
//! while ticking. Transitions themselves are infallible; the only runtime
//! failures come from user-supplied hooks.

use thiserror::Error;

/// Error returned by a failing lifecycle hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Invalid animation configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No words to animate.
    #[error("invalid config: words must not be empty")]
    EmptyWords,

    /// A speed of zero would re-arm the timer in a busy loop.
    #[error("invalid config: {field} must be positive")]
    NonPositiveSpeed {
        /// Name of the offending field
        field: &'static str,
    },
}

/// Errors surfaced by [`crate::Engine`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// A lifecycle hook failed. The transition that triggered it is already
    /// committed and the next tick already armed.
    #[error("{hook} hook failed: {source}")]
    Hook {
        /// Which hook failed (`on_loop` or `on_done`)
        hook: &'static str,
        /// Error returned by the hook
        #[source]
        source: HookError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_error_names_hook() {
        let err = EngineError::Hook { hook: "on_done", source: "boom".into() };

        assert_eq!(err.to_string(), "on_done hook failed: boom");
    }

    #[test]
    fn non_positive_speed_names_field() {
        let err = ConfigError::NonPositiveSpeed { field: "delete_speed" };
        assert_eq!(err.to_string(), "invalid config: delete_speed must be positive");
    }
}
