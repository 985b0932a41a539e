//! Lifecycle hooks.
//!
//! Hooks run synchronously inside the tick that triggered them, after the
//! transition is committed and the next deadline armed. A slow hook stalls
//! the animation; a failing hook surfaces as [`crate::EngineError::Hook`].

use std::fmt;

use crate::error::HookError;

/// Callbacks invoked by [`crate::Engine`].
///
/// Both methods default to doing nothing.
pub trait Hooks {
    /// A full pass through the word list completed. `loop_count` is the
    /// 1-based number of completed passes. Only called when looping.
    fn on_loop(&mut self, loop_count: u32) -> Result<(), HookError> {
        let _ = loop_count;
        Ok(())
    }

    /// The last word finished typing in a non-looping animation. Called at
    /// most once per engine.
    fn on_done(&mut self) -> Result<(), HookError> {
        Ok(())
    }
}

impl<H: Hooks + ?Sized> Hooks for Box<H> {
    fn on_loop(&mut self, loop_count: u32) -> Result<(), HookError> {
        (**self).on_loop(loop_count)
    }

    fn on_done(&mut self) -> Result<(), HookError> {
        (**self).on_done()
    }
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl Hooks for NoopHooks {}

type LoopFn = Box<dyn FnMut(u32) -> Result<(), HookError> + Send>;
type DoneFn = Box<dyn FnMut() -> Result<(), HookError> + Send>;

/// Hooks built from closures.
///
/// ```
/// use typewriter_core::FnHooks;
///
/// let hooks = FnHooks::new()
///     .with_on_loop(|n| {
///         tracing::info!(loop_count = n, "pass complete");
///         Ok(())
///     })
///     .with_on_done(|| Ok(()));
/// # let _ = hooks;
/// ```
#[derive(Default)]
pub struct FnHooks {
    on_loop: Option<LoopFn>,
    on_done: Option<DoneFn>,
}

impl FnHooks {
    /// Hooks with no callbacks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loop callback.
    #[must_use]
    pub fn with_on_loop<F>(mut self, f: F) -> Self
    where
        F: FnMut(u32) -> Result<(), HookError> + Send + 'static,
    {
        self.on_loop = Some(Box::new(f));
        self
    }

    /// Install the completion callback.
    #[must_use]
    pub fn with_on_done<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> Result<(), HookError> + Send + 'static,
    {
        self.on_done = Some(Box::new(f));
        self
    }
}

impl Hooks for FnHooks {
    fn on_loop(&mut self, loop_count: u32) -> Result<(), HookError> {
        self.on_loop.as_mut().map_or(Ok(()), |f| f(loop_count))
    }

    fn on_done(&mut self) -> Result<(), HookError> {
        self.on_done.as_mut().map_or(Ok(()), |f| f())
    }
}

impl fmt::Debug for FnHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHooks")
            .field("on_loop", &self.on_loop.is_some())
            .field("on_done", &self.on_done.is_some())
            .finish()
    }
}
