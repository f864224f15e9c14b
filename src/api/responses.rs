//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    display::{format_clock, participants_text, DisplayPhase},
    state::{ConnectionState, SessionState, TimerState},
};

/// Snapshot of what the client currently shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub room: String,
    pub connection: ConnectionState,
    pub remaining_seconds: Option<u64>,
    pub clock: Option<String>,
    pub phase: Option<DisplayPhase>,
    pub participant_count: Option<u64>,
    pub participants: Option<String>,
    pub last_sync_time: Option<DateTime<Utc>>,
    pub uptime: String,
}

impl StatusResponse {
    /// Build a status snapshot from session and timer state
    pub fn new(
        room: String,
        session: &SessionState,
        timer: &TimerState,
        cooldown_threshold: u64,
        uptime: String,
    ) -> Self {
        let remaining_seconds = timer.remaining_seconds();
        Self {
            room,
            connection: session.connection,
            remaining_seconds,
            clock: remaining_seconds.map(format_clock),
            phase: remaining_seconds.map(|r| DisplayPhase::select(r, cooldown_threshold)),
            participant_count: session.participant_count,
            participants: session.participant_count.map(participants_text),
            last_sync_time: session.last_sync_time,
            uptime,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
