//! HTTP API module
//! 
//! Optional local endpoint exposing the countdown and participant status as JSON.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        state::ConnectionState,
        tasks::countdown::refresh_timer,
    };
    use super::responses::{HealthResponse, StatusResponse};

    async fn get_json<T: serde::de::DeserializeOwned>(router: Router, uri: &str) -> T {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn status_before_sync_has_no_clock() {
        let state = Arc::new(AppState::new("club_pomo", 300, 1800));
        let status: StatusResponse = get_json(create_router(state), "/status").await;

        assert_eq!(status.room, "club_pomo");
        assert_eq!(status.connection, ConnectionState::Unconnected);
        assert!(status.remaining_seconds.is_none());
        assert!(status.clock.is_none());
        assert!(status.participants.is_none());
    }

    #[tokio::test]
    async fn status_reports_countdown_and_participants() {
        let state = Arc::new(AppState::new("club_pomo", 300, 1800));
        state.set_connection(ConnectionState::Connecting).unwrap();
        state.set_connection(ConnectionState::Connected).unwrap();
        state.sync_time(250).unwrap();
        state.set_participant_count(1).unwrap();
        refresh_timer(&state).unwrap();

        let status: StatusResponse = get_json(create_router(state), "/status").await;

        assert_eq!(status.connection, ConnectionState::Connected);
        assert_eq!(status.remaining_seconds, Some(250));
        assert_eq!(status.clock.as_deref(), Some("04:10"));
        assert_eq!(status.phase, Some(crate::display::DisplayPhase::CooldownWaiting));
        assert_eq!(status.participants.as_deref(), Some("1 person is studying with you!"));
        assert!(status.last_sync_time.is_some());
    }

    #[tokio::test]
    async fn health_is_ok() {
        let state = Arc::new(AppState::new("club_pomo", 300, 1800));
        let health: HealthResponse = get_json(create_router(state), "/health").await;
        assert_eq!(health.status, "ok");
    }
}
