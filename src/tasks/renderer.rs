//! Terminal renderer for the countdown and toasts

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    display::{CountdownView, ToastEvent, ToastKind},
    state::{AppState, ConnectionState, SessionState, TimerState},
};

/// Line shown for the current session and timer state
pub fn render_line(session: &SessionState, timer: &TimerState, cooldown_threshold: u64) -> String {
    if let Some(remaining) = timer.remaining_seconds() {
        return CountdownView::new(remaining, cooldown_threshold).to_string();
    }

    match session.connection {
        ConnectionState::Unconnected | ConnectionState::Connecting => "Connecting to room...".to_string(),
        ConnectionState::Connected => "Waiting for the room to sync time...".to_string(),
        ConnectionState::Failed => "Couldn't connect to the room".to_string(),
        ConnectionState::Disconnected => "Disconnected from the room".to_string(),
    }
}

/// Line shown for a toast; the status toast looks the same when shown or updated
pub fn render_toast(toast: &ToastEvent) -> String {
    match toast.kind() {
        ToastKind::OneShot => format!("🔔 {}", toast.text()),
        ToastKind::Status => format!("👥 {}", toast.text()),
    }
}

/// Background task printing the countdown whenever what it shows changes
pub async fn render_task(state: Arc<AppState>) {
    info!("Starting renderer task");

    let mut timer_rx = state.timer_update_tx.subscribe();
    let mut session_rx = state.session_change_tx.subscribe();
    let mut toast_rx = state.subscribe_toasts();
    let mut last_line: Option<String> = None;

    loop {
        let line = match (state.get_session_state(), state.get_timer_state()) {
            (Ok(session), Ok(timer)) => Some(render_line(&session, &timer, state.cooldown_threshold)),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Failed to read state for rendering: {}", e);
                None
            }
        };
        if line.is_some() && line != last_line {
            if let Some(line) = &line {
                println!("{}", line);
            }
            last_line = line;
        }

        tokio::select! {
            changed = timer_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = session_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            toast = toast_rx.recv() => match toast {
                Ok(toast) => println!("{}", render_toast(&toast)),
                Err(RecvError::Lagged(skipped)) => warn!("Renderer skipped {} toasts", skipped),
                Err(RecvError::Closed) => break,
            },
        }
    }

    debug!("Renderer task stopped");
}
