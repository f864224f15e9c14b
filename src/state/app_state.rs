//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::Utc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::display::{ToastEvent, Toaster, RESTARTING_THRESHOLD};
use super::{ConnectionState, Countdown, SessionState, TimerState};

/// Shared state written by the session client and read by the presentation layer
#[derive(Debug)]
pub struct AppState {
    /// What the room has told us so far
    pub session_state: Arc<Mutex<SessionState>>,
    /// Countdown currently on screen
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Static session configuration
    pub room: String,
    pub cooldown_threshold: u64,
    pub cycle_duration: u64,
    pub start_time: Instant,
    /// Channel for session state changes
    pub session_change_tx: watch::Sender<SessionState>,
    /// Keep the receiver alive to prevent channel closure
    pub _session_change_rx: watch::Receiver<SessionState>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    pub _timer_update_rx: watch::Receiver<TimerState>,
    /// Channel for toast notifications
    pub toast_tx: broadcast::Sender<ToastEvent>,
    toaster: Mutex<Toaster>,
}

impl AppState {
    /// Create a new AppState with no session data yet.
    ///
    /// Thresholds below the restarting window are raised to it.
    pub fn new(room: impl Into<String>, cooldown_threshold: u64, cycle_duration: u64) -> Self {
        let cooldown_threshold = if cooldown_threshold < RESTARTING_THRESHOLD {
            warn!("Cooldown threshold {}s raised to {}s", cooldown_threshold, RESTARTING_THRESHOLD);
            RESTARTING_THRESHOLD
        } else {
            cooldown_threshold
        };
        let (session_change_tx, session_change_rx) = watch::channel(SessionState::new());
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerState::new());
        let (toast_tx, _) = broadcast::channel(100);

        Self {
            session_state: Arc::new(Mutex::new(SessionState::new())),
            timer_state: Arc::new(Mutex::new(TimerState::new())),
            room: room.into(),
            cooldown_threshold,
            cycle_duration,
            start_time: Instant::now(),
            session_change_tx,
            _session_change_rx: session_change_rx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
            toast_tx,
            toaster: Mutex::new(Toaster::new()),
        }
    }

    /// Update the session state and notify watchers
    pub fn update_session<F>(&self, action: &str, updater: F) -> Result<SessionState, String>
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.session_state.lock()
            .map_err(|e| format!("Failed to lock session state: {}", e))?;

        updater(&mut *state);
        let new_state = state.clone();
        drop(state); // Release the lock early

        debug!("Session state updated by {}", action);

        if let Err(e) = self.session_change_tx.send(new_state.clone()) {
            warn!("Failed to send session change notification: {}", e);
        }

        Ok(new_state)
    }

    /// Mirror the session client's connection state
    pub fn set_connection(&self, connection: ConnectionState) -> Result<SessionState, String> {
        info!("Connection state: {}", connection);
        self.update_session("connection", |state| state.connection = connection)
    }

    /// Replace the remaining time with a value synced from the server
    pub fn sync_time(&self, remaining_seconds: u64) -> Result<SessionState, String> {
        info!("Time synced from room: {}s remaining", remaining_seconds);
        let countdown = Countdown::start(remaining_seconds, self.cycle_duration);
        self.update_session("sync_time", |state| {
            state.countdown = Some(countdown);
            state.last_sync_time = Some(Utc::now());
        })
    }

    /// Replace the participant count and refresh the status toast
    pub fn set_participant_count(&self, count: u64) -> Result<SessionState, String> {
        info!("Participant count: {}", count);
        let new_state = self.update_session("participant_count", |state| {
            state.participant_count = Some(count)
        })?;

        let toast = self.toaster.lock()
            .map_err(|e| format!("Failed to lock toaster: {}", e))?
            .participant_status(count);
        self.publish_toast(toast);

        Ok(new_state)
    }

    /// Fire a one-shot toast
    pub fn notify(&self, text: &str) -> Result<ToastEvent, String> {
        let toast = self.toaster.lock()
            .map_err(|e| format!("Failed to lock toaster: {}", e))?
            .one_shot(text);
        self.publish_toast(toast.clone());
        Ok(toast)
    }

    fn publish_toast(&self, toast: ToastEvent) {
        // No subscribers just means nothing renders toasts right now
        if self.toast_tx.send(toast).is_err() {
            debug!("Toast dropped, no subscribers");
        }
    }

    /// Subscribe to toast notifications
    pub fn subscribe_toasts(&self) -> broadcast::Receiver<ToastEvent> {
        self.toast_tx.subscribe()
    }

    /// Get current session state
    pub fn get_session_state(&self) -> Result<SessionState, String> {
        self.session_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock session state: {}", e))
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Update timer state, notifying watchers only when the shown value changes
    pub fn update_timer_state(&self, remaining_seconds: Option<u64>) -> Result<(), String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let new_timer_state = TimerState::from(remaining_seconds);
        if *timer_state == new_timer_state {
            return Ok(());
        }
        *timer_state = new_timer_state.clone();
        drop(timer_state);

        if let Err(e) = self.timer_update_tx.send(new_timer_state) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(())
    }

    /// Calculate client uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
