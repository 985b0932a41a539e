//! Virtual clock.
//!
//! [`SimInstant`] is an offset from the start of a simulation. [`SimClock`]
//! only moves when told to; sleeping on it jumps straight to the deadline, so
//! a run that would take minutes of wall time finishes instantly and
//! reproducibly.

use std::{
    fmt,
    future::Future,
    ops::{Add, Sub},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use typewriter_core::Clock;

/// Point in virtual time, measured from the start of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimInstant(Duration);

impl SimInstant {
    /// Start of the simulation.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Instant `ms` milliseconds after the start.
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Time since the start of the simulation.
    pub const fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for SimInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub for SimInstant {
    type Output = Duration;

    /// Saturates at zero, like `std::time::Instant`.
    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for SimInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}ms", self.0.as_millis())
    }
}

/// Shared virtual clock.
///
/// Clones observe and move the same time. Time never goes backwards.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    nanos: Arc<AtomicU64>,
}

impl SimClock {
    /// Clock at [`SimInstant::ZERO`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(by, Ordering::SeqCst);
    }

    /// Move time forward to `instant`. No-op if it already passed.
    pub fn advance_to(&self, instant: SimInstant) {
        let target = u64::try_from(instant.0.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_max(target, Ordering::SeqCst);
    }
}

impl Clock for SimClock {
    type Instant = SimInstant;

    fn now(&self) -> SimInstant {
        SimInstant(Duration::from_nanos(self.nanos.load(Ordering::SeqCst)))
    }

    fn sleep_until(&self, deadline: SimInstant) -> impl Future<Output = ()> + Send {
        let clock = self.clone();
        async move { clock.advance_to(deadline) }
    }
}
