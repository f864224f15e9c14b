//! Text views rendered from session state

use std::fmt;

use super::{format::format_clock, mode::DisplayPhase};

/// Countdown view for a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    pub phase: DisplayPhase,
    pub clock: String,
}

impl CountdownView {
    pub fn new(remaining_seconds: u64, cooldown_threshold: u64) -> Self {
        Self {
            phase: DisplayPhase::select(remaining_seconds, cooldown_threshold),
            clock: format_clock(remaining_seconds),
        }
    }
}

impl fmt::Display for CountdownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase.headline() {
            Some(headline) => write!(f, "{}  {}", headline, self.clock),
            None => write!(f, "{}", self.clock),
        }
    }
}

/// Text for the persistent participant status indicator
pub fn participants_text(count: u64) -> String {
    if count == 1 {
        "1 person is studying with you!".to_string()
    } else {
        format!("{} persons are studying with you!", count)
    }
}
