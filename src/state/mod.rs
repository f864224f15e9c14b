//! State management module
//! 
//! This module contains the session state pushed by the room, the local
//! countdown derived from it and the shared application state.

pub mod app_state;
pub mod connection_state;
pub mod countdown;
pub mod session_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use connection_state::ConnectionState;
pub use countdown::Countdown;
pub use session_state::SessionState;
pub use timer_state::TimerState;
