//! Display mode and phase selection for the countdown

use serde::{Deserialize, Serialize};

/// Default cooldown threshold in seconds
pub const DEFAULT_COOLDOWN_THRESHOLD: u64 = 300;

/// Below this many seconds a cooldown is shown as restarting
pub const RESTARTING_THRESHOLD: u64 = 5;

/// Two-valued display mode derived from the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Cooldown,
    Normal,
}

/// Presentation phase, splitting cooldown into waiting and restarting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayPhase {
    CooldownRestarting,
    CooldownWaiting,
    Normal,
}

impl DisplayMode {
    /// Classify remaining seconds against the cooldown threshold
    pub fn select(remaining_seconds: u64, cooldown_threshold: u64) -> Self {
        if remaining_seconds <= cooldown_threshold {
            DisplayMode::Cooldown
        } else {
            DisplayMode::Normal
        }
    }
}

impl DisplayPhase {
    /// Classify remaining seconds into the phase shown to the user.
    ///
    /// Restarting is a sub-phase of cooldown, so it applies below
    /// `RESTARTING_THRESHOLD` only when `cooldown_threshold` is at least that;
    /// `AppState` enforces this.
    pub fn select(remaining_seconds: u64, cooldown_threshold: u64) -> Self {
        match DisplayMode::select(remaining_seconds, cooldown_threshold) {
            DisplayMode::Normal => DisplayPhase::Normal,
            DisplayMode::Cooldown if remaining_seconds < RESTARTING_THRESHOLD => {
                DisplayPhase::CooldownRestarting
            }
            DisplayMode::Cooldown => DisplayPhase::CooldownWaiting,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        match self {
            DisplayPhase::Normal => DisplayMode::Normal,
            _ => DisplayMode::Cooldown,
        }
    }

    /// Headline shown above the clock, if any
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            DisplayPhase::CooldownRestarting => Some("🚦 Restarting In 🚦"),
            DisplayPhase::CooldownWaiting => Some("🥶 Cooldown 🥶"),
            DisplayPhase::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u64 = DEFAULT_COOLDOWN_THRESHOLD;

    #[test]
    fn selects_phase_at_boundaries() {
        assert_eq!(DisplayPhase::select(0, THRESHOLD), DisplayPhase::CooldownRestarting);
        assert_eq!(DisplayPhase::select(4, THRESHOLD), DisplayPhase::CooldownRestarting);
        assert_eq!(DisplayPhase::select(5, THRESHOLD), DisplayPhase::CooldownWaiting);
        assert_eq!(DisplayPhase::select(THRESHOLD, THRESHOLD), DisplayPhase::CooldownWaiting);
        assert_eq!(DisplayPhase::select(THRESHOLD + 1, THRESHOLD), DisplayPhase::Normal);
    }

    #[test]
    fn mode_follows_threshold() {
        assert_eq!(DisplayMode::select(THRESHOLD, THRESHOLD), DisplayMode::Cooldown);
        assert_eq!(DisplayMode::select(THRESHOLD + 1, THRESHOLD), DisplayMode::Normal);
        assert_eq!(DisplayPhase::select(3, THRESHOLD).mode(), DisplayMode::Cooldown);
    }

    #[test]
    fn only_cooldown_has_headline() {
        assert!(DisplayPhase::Normal.headline().is_none());
        assert_eq!(DisplayPhase::CooldownWaiting.headline(), Some("🥶 Cooldown 🥶"));
    }

    #[test]
    fn phase_serializes_kebab_case() {
        let json = serde_json::to_string(&DisplayPhase::CooldownRestarting).unwrap();
        assert_eq!(json, "\"cooldown-restarting\"");
    }
}
