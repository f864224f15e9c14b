//! Club Pomo - a client for a shared Pomodoro room
//! 
//! This is the main entry point for the club-pomo application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use club_pomo::{
    config::Config,
    state::AppState,
    api::create_router,
    session::{SessionClient, WsTransport},
    tasks::{countdown_task, render_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout stays the countdown display
    tracing_subscriber::fmt()
        .with_env_filter(format!("club_pomo={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting club-pomo v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: endpoint={}, room={}, cooldown={}s, cycle={}s",
          config.endpoint, config.room, config.cooldown_threshold, config.duration);

    let state = Arc::new(AppState::new(
        config.room.clone(),
        config.cooldown_threshold,
        config.duration,
    ));

    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state).await;
    });

    let render_state = Arc::clone(&state);
    tokio::spawn(async move {
        render_task(render_state).await;
    });

    if let Some(addr) = config.address() {
        let listener = TcpListener::bind(&addr).await?;
        let app = create_router(Arc::clone(&state));
        info!("Status endpoint on http://{}/status", addr);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Status server error: {}", e);
            }
        });
    }

    // Joined once; a failed join or a disconnect leaves a static display
    let mut client = SessionClient::new(Arc::clone(&state));
    let transport = WsTransport::new(config.endpoint.clone());
    tokio::spawn(async move {
        client.start(&transport).await;
    });

    shutdown_signal().await?;

    info!("Shutdown complete");
    Ok(())
}
