//! Display module
//!
//! Pure helpers that turn session state into what the user sees: the clock,
//! the cooldown phase, the participant status text and toast notifications.

pub mod format;
pub mod mode;
pub mod toast;
pub mod view;

// Re-export main types
pub use format::format_clock;
pub use mode::{DisplayMode, DisplayPhase, DEFAULT_COOLDOWN_THRESHOLD, RESTARTING_THRESHOLD};
pub use toast::{ToastEvent, ToastKind, Toaster, PARTICIPANT_JOINED_TEXT};
pub use view::{participants_text, CountdownView};
