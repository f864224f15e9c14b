//! Session state received from the room

use chrono::{DateTime, Utc};

use super::{ConnectionState, Countdown};

/// Everything the room has told us so far
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Lifecycle of the room connection, mirrored from the session client
    pub connection: ConnectionState,
    /// Countdown started from the last time sync; `None` until the first one
    pub countdown: Option<Countdown>,
    /// Number of people in the room; `None` until the first count message
    pub participant_count: Option<u64>,
    pub last_sync_time: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Create an empty state, before any connection attempt
    pub fn new() -> Self {
        Self {
            connection: ConnectionState::Unconnected,
            countdown: None,
            participant_count: None,
            last_sync_time: None,
        }
    }

    /// Last remaining time received from the server
    pub fn synced_remaining(&self) -> Option<u64> {
        self.countdown.map(|c| c.initial_remaining())
    }

    /// Remaining time as the local countdown shows it now
    pub fn current_remaining(&self) -> Option<u64> {
        self.countdown.map(|c| c.remaining())
    }

    pub fn has_time(&self) -> bool {
        self.countdown.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
