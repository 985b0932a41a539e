//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: animation and UI state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! Each cycle waits for whichever comes first, the engine's next deadline or
//! user input, feeds it to the App and executes the resulting actions.

use thiserror::Error;
use typewriter_core::EngineError;

use crate::{App, AppAction, Driver};

/// Errors that stop the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError<E>
where
    E: std::error::Error + 'static,
{
    /// The driver failed to read input or render.
    #[error("driver error: {0}")]
    Driver(#[source] E),

    /// A hook failed while the animation ticked.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Generic runtime that orchestrates the App and a Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime from a driver and an App started on the
    /// driver's clock.
    pub fn new(driver: D, app: App<D::Instant>) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// 1. Renders the initial frame
    /// 2. Waits for the next deadline or input from the driver
    /// 3. Feeds the event to the App and executes its actions
    ///
    /// The driver is stopped on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails or a hook fails.
    pub async fn run(&mut self) -> Result<(), RuntimeError<D::Error>> {
        let result = self.event_loop().await;
        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<(), RuntimeError<D::Error>> {
        self.driver.render(&self.app).map_err(RuntimeError::Driver)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                tracing::debug!("runtime quitting");
                return Ok(());
            }
        }
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, RuntimeError<D::Error>> {
        let deadline = self.app.deadline();
        let event = self.driver.poll_event(deadline).await.map_err(RuntimeError::Driver)?;

        let now = self.driver.now();
        let actions = self.app.handle(event, now)?;
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError<D::Error>> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app).map_err(RuntimeError::Driver)?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Application state.
    pub fn app(&self) -> &App<D::Instant> {
        &self.app
    }

    /// Application state, mutably (reconfigure between runs).
    pub fn app_mut(&mut self) -> &mut App<D::Instant> {
        &mut self.app
    }

    /// Underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the runtime, returning the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
