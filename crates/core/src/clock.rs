//! Fixed-period tick scheduling for the driver loop.
//!
//! The clock does not sleep. The driver asks how long it may block waiting for
//! input ([`TickClock::timeout`]) and whether a tick is due
//! ([`TickClock::poll_due`]). Time is passed in so the logic is testable.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    last_tick: Instant,
}

impl TickClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last_tick: now,
        }
    }

    /// Time left until the next tick, zero if one is already due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.period
            .checked_sub(now.saturating_duration_since(self.last_tick))
            .unwrap_or(Duration::ZERO)
    }

    /// Returns true (and restarts the period) when a tick is due.
    ///
    /// Late ticks are not made up: a stalled loop resumes at one tick per
    /// period instead of bursting.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Start a fresh period at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
