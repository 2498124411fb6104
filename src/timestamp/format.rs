//! Human-readable durations.

use crate::constants::timestamp::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Format a millisecond duration as `MM:SS.ss`, or `HH:MM:SS.ss` once it
/// reaches an hour.
///
/// Hundredths are truncated, so `59_999` renders as `00:59.99` rather than
/// rolling over to `00:60.00`.
pub fn format_duration(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let hundredths = (ms % MS_PER_SECOND) / 10;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}.{hundredths:02}")
    } else {
        format!("{minutes:02}:{seconds:02}.{hundredths:02}")
    }
}
