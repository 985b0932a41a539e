//! Typewriter animation engine.
//!
//! Types each word of a list character by character, pauses, deletes it
//! again and moves on to the next word, optionally looping forever. The
//! crate is split the same way the animation is driven:
//!
//! - [`Typewriter`]: pure state machine. One call to [`Typewriter::tick`]
//!   performs exactly one transition and returns [`TypewriterAction`]s.
//! - [`Timer`]: the single pending deadline. Arming always cancels first.
//! - [`Engine`]: owns a machine, a timer and the lifecycle [`Hooks`]. Hosts
//!   poll it with the current time; a passed deadline fires one tick.
//! - [`Clock`]: time source, real ([`SystemClock`]) or virtual (harness).
//!
//! Time is always passed in, so the same engine runs on the wall clock and
//! in deterministic simulation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod timer;
pub mod typewriter;

pub use clock::{Clock, ClockInstant, SystemClock};
pub use config::{DEFAULT_DELAY_SPEED, DEFAULT_DELETE_SPEED, DEFAULT_TYPE_SPEED, TypewriterConfig};
pub use engine::Engine;
pub use error::{ConfigError, EngineError, HookError};
pub use hooks::{FnHooks, Hooks, NoopHooks};
pub use timer::Timer;
pub use typewriter::{AnimationState, Phase, Typewriter, TypewriterAction};
