//! Monotonic time sources.
//!
//! The session clock never reads wall time directly. It asks a `TimeSource`,
//! which is `Instant`-backed in production and a hand-advanced cell in tests.
//! This keeps every timing behavior in the engine replayable.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic clock readable as a `Duration` since some fixed origin.
///
/// Implementations must be non-decreasing. The absolute origin is
/// irrelevant; the engine only ever subtracts readings.
pub trait TimeSource {
    /// Current reading.
    fn now(&self) -> Duration;
}

/// Production time source backed by `std::time::Instant`.
#[derive(Clone, Debug)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced time source for tests and deterministic embedders.
///
/// Clones share the same underlying cell, so a test can keep a handle while
/// the session owns another:
///
/// ```
/// use std::time::Duration;
/// use rust_pairs::core::{ManualTime, TimeSource};
///
/// let time = ManualTime::new();
/// let handle = time.clone();
/// handle.advance(Duration::from_secs(3));
/// assert_eq!(time.now(), Duration::from_secs(3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTime {
    now: Rc<Cell<Duration>>,
}

impl ManualTime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump to an absolute reading. Must not move backwards.
    pub fn set(&self, now: Duration) {
        debug_assert!(now >= self.now.get(), "time source must be monotonic");
        self.now.set(now);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
