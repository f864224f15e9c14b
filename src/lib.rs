//! Club Pomo - a client for a shared Pomodoro room
//! 
//! This library joins a real-time room, follows the countdown the room syncs
//! and shows who else is studying, both in the terminal and on an optional
//! local status endpoint.

pub mod config;
pub mod display;
pub mod error;
pub mod state;
pub mod session;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{SessionError, SessionResult};
pub use state::AppState;
pub use session::{SessionClient, WsTransport};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
