//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use typewriter_core::ClockInstant;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the production TUI and simulation.
///
/// # Implementations
///
/// - **TUI**: Uses crossterm for terminal events and tokio timers
/// - **Simulation**: Scripted events over a virtual clock
///
/// # Associated Types
///
/// - [`Error`](Driver::Error): Platform-specific error type
/// - [`Instant`](Driver::Instant): Time representation (real or virtual)
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in simulation.
    type Instant: ClockInstant;

    /// Wait for the next event.
    ///
    /// Resolves with [`AppEvent::Tick`] once `deadline` passes, or earlier
    /// with any input that arrives first. With no deadline, waits for input
    /// only.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails or closes.
    fn poll_event(
        &mut self,
        deadline: Option<Self::Instant>,
    ) -> impl Future<Output = Result<AppEvent, Self::Error>> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App<Self::Instant>) -> Result<(), Self::Error>;

    /// Release resources. Called once when the runtime exits.
    fn stop(&mut self);
}
