//! Wall-clock interval scheduling for sampled execution.
//!
//! The control loop ticks once per second, but logging and PID updates
//! fire on their own configured periods. An `IntervalClock` tracks when a
//! stage last fired; between firings the previous actuator output is
//! simply held.

use serde::{Deserialize, Serialize};

/// Tracks when a periodic stage is due, in whole unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalClock {
    /// Period in seconds.
    pub period: i64,
    /// Unix timestamp of the last firing; 0 until the first firing, so
    /// every clock is due on the first tick.
    pub last_fired: i64,
}

impl IntervalClock {
    /// Create a clock that is immediately due.
    pub fn new(period: i64) -> Self {
        Self {
            period,
            last_fired: 0,
        }
    }

    /// Whether the stage should fire at time `now`.
    pub fn due(&self, now: i64) -> bool {
        now - self.last_fired >= self.period
    }

    /// Record a firing at time `now`.
    pub fn mark(&mut self, now: i64) {
        self.last_fired = now;
    }
}
