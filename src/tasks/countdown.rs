//! Local countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Recompute the displayed remaining time from the last sync
pub fn refresh_timer(state: &AppState) -> Result<Option<u64>, String> {
    let remaining = state.get_session_state()?.current_remaining();
    state.update_timer_state(remaining)?;
    Ok(remaining)
}

/// Background task that decrements the countdown every second between syncs
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut session_rx = state.session_change_tx.subscribe();
    let mut last_countdown = session_rx.borrow_and_update().countdown;
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = session_rx.changed() => {
                if changed.is_err() {
                    debug!("Session channel closed, stopping countdown task");
                    break;
                }
                // Only a new sync moves the whole-second boundaries of the countdown
                let countdown = session_rx.borrow_and_update().countdown;
                if countdown != last_countdown {
                    last_countdown = countdown;
                    ticker.reset();
                }
            }
        }

        if let Err(e) = refresh_timer(&state) {
            error!("Failed to refresh countdown: {}", e);
        }
    }
}
