//! Elapsed play time.
//!
//! The clock accumulates a running total at each stop and measures only the
//! delta since the last start while running, so racing start/stop calls
//! never double-count. It never reads time itself; callers pass readings
//! from the session's `TimeSource`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pausable monotonic elapsed-time counter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    accumulated: Duration,
    started_at: Option<Duration>,
}

impl SessionClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `now`. No-op while already running.
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop counting, folding the delta since the last start into the total.
    /// No-op while stopped.
    pub fn stop(&mut self, now: Duration) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.checked_sub(started_at).unwrap_or_default();
        }
    }

    /// Drop all accumulated time and stop.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total elapsed time as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.started_at {
            Some(started_at) => {
                self.accumulated + now.checked_sub(started_at).unwrap_or_default()
            }
            None => self.accumulated,
        }
    }

    /// Whole seconds elapsed as of `now`.
    #[must_use]
    pub fn elapsed_seconds(&self, now: Duration) -> u64 {
        self.elapsed(now).as_secs()
    }
}

/// Format whole seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_mmss(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
