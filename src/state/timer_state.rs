//! What the countdown shows on screen

/// Displayed countdown, recomputed from the last sync on every tick.
///
/// `None` until the room has synced a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: Option<u64>,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A countdown showing `remaining_seconds`
    pub fn showing(remaining_seconds: u64) -> Self {
        Self {
            remaining_seconds: Some(remaining_seconds),
        }
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        self.remaining_seconds
    }
}

impl From<Option<u64>> for TimerState {
    fn from(remaining_seconds: Option<u64>) -> Self {
        Self { remaining_seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_a_value_is_shown() {
        assert_eq!(TimerState::new().remaining_seconds(), None);
        assert_eq!(TimerState::from(Some(12)), TimerState::showing(12));
        assert_eq!(TimerState::from(None), TimerState::new());
    }
}
