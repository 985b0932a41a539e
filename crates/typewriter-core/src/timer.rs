//! Single-shot deadline timer.
//!
//! A [`Timer`] holds at most one pending deadline. [`Timer::arm`] is the only
//! way to schedule and always replaces whatever was pending, so a stale
//! deadline can never fire next to a fresh one. The timer never sleeps: the
//! host compares deadlines against its own clock.

use std::time::Duration;

use crate::clock::ClockInstant;

/// At most one pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer<I> {
    deadline: Option<I>,
}

impl<I> Default for Timer<I> {
    fn default() -> Self {
        Self { deadline: None }
    }
}

impl<I: ClockInstant> Timer<I> {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending deadline and schedule a new one `delay` after
    /// `now`. Returns the new deadline.
    pub fn arm(&mut self, now: I, delay: Duration) -> I {
        self.cancel();
        let deadline = now + delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Cancel the pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Pending deadline. `None` if disarmed.
    #[must_use]
    pub fn deadline(&self) -> Option<I> {
        self.deadline
    }

    /// Whether the pending deadline has passed at `now`.
    #[must_use]
    pub fn is_due(&self, now: I) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarm and return true if the deadline has passed at `now`.
    ///
    /// This is the firing edge: it returns true once per arm.
    pub fn take_due(&mut self, now: I) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
