//! Clock formatting for remaining seconds

/// Format remaining seconds as a zero-padded `MM:SS` clock.
///
/// Minutes are not capped at two digits, so 100 minutes renders as `100:00`.
pub fn format_clock(remaining_seconds: u64) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
