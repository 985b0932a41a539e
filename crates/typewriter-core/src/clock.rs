//! Clock abstraction for deterministic testing.
//!
//! Decouples the animation from the wall clock. Production code uses
//! [`SystemClock`] (std instants, tokio sleeping); the simulation harness
//! supplies a virtual clock that only moves when told to.

use std::{
    fmt,
    future::Future,
    ops::{Add, Sub},
    time::Duration,
};

/// Point in time understood by the engine and its timer.
///
/// Blanket-implemented for every type with the required arithmetic, which
/// covers `std::time::Instant` and virtual simulation instants.
pub trait ClockInstant:
    Copy + Ord + Send + Sync + fmt::Debug + Add<Duration, Output = Self> + Sub<Output = Duration>
{
}

impl<T> ClockInstant for T where
    T: Copy + Ord + Send + Sync + fmt::Debug + Add<Duration, Output = T> + Sub<Output = Duration>
{
}

/// Abstract time source.
///
/// # Invariants
///
/// - `now()` never goes backwards within one execution context.
/// - `sleep_until()` resolves no earlier than `deadline` as observed by
///   `now()`.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Instant type produced by this clock.
    type Instant: ClockInstant;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Wait until `deadline`. Returns immediately if it already passed.
    ///
    /// Only driver code sleeps; the engine itself never does.
    fn sleep_until(&self, deadline: Self::Instant) -> impl Future<Output = ()> + Send;
}

/// Production clock backed by `std::time::Instant` and tokio timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn sleep_until(&self, deadline: Self::Instant) -> impl Future<Output = ()> + Send {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_time_advances() {
        let clock = SystemClock::new();

        let t1 = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        let t2 = clock.now();

        assert!(t2 > t1, "Time should advance");
    }

    #[tokio::test]
    async fn system_clock_sleep_until_waits_for_deadline() {
        let clock = SystemClock::new();

        let start = clock.now();
        let deadline = start + Duration::from_millis(30);
        clock.sleep_until(deadline).await;

        assert!(clock.now() >= deadline, "Sleep should last until the deadline");
    }

    #[tokio::test]
    async fn system_clock_past_deadline_returns_immediately() {
        let clock = SystemClock::new();

        let past = clock.now();
        std::thread::sleep(Duration::from_millis(2));
        clock.sleep_until(past).await;
    }
}
