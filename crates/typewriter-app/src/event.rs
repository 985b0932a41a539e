//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Ticks come from the runtime when the
//! engine's deadline passes; keys and resizes come from the user.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The engine's pending deadline has passed.
    Tick,

    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
