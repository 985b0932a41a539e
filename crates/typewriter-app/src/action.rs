//! Application actions.
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,
}
