//! Local countdown between server syncs

use std::time::Instant;

/// Countdown restarted from every time sync.
///
/// After reaching zero it repeats from the cycle duration until the next sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial_remaining: u64,
    cycle_duration: u64,
    synced_at: Instant,
}

impl Countdown {
    /// Start a countdown from a freshly synced value
    pub fn start(initial_remaining: u64, cycle_duration: u64) -> Self {
        Self::started_at(initial_remaining, cycle_duration, Instant::now())
    }

    pub fn started_at(initial_remaining: u64, cycle_duration: u64, synced_at: Instant) -> Self {
        Self {
            initial_remaining,
            cycle_duration,
            synced_at,
        }
    }

    /// The value received from the server
    pub fn initial_remaining(&self) -> u64 {
        self.initial_remaining
    }

    /// Remaining seconds once `elapsed` seconds have passed since the sync
    pub fn remaining_after(&self, elapsed: u64) -> u64 {
        if elapsed <= self.initial_remaining {
            return self.initial_remaining - elapsed;
        }
        if self.cycle_duration == 0 {
            return 0;
        }

        let into_cycle = (elapsed - self.initial_remaining) % self.cycle_duration;
        if into_cycle == 0 {
            0
        } else {
            self.cycle_duration - into_cycle
        }
    }

    /// Remaining seconds right now
    pub fn remaining(&self) -> u64 {
        self.remaining_after(self.synced_at.elapsed().as_secs())
    }
}
