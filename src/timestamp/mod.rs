//! Timestamp parsing and duration formatting.
//!
//! Timestamps are typed by humans at a prompt or on the command line and
//! are converted to whole milliseconds, the unit every other module works in.

mod format;
mod parser;

pub use format::format_duration;
pub use parser::parse_timestamp;

/// Help text listing the accepted timestamp shapes.
pub const ACCEPTED_FORMATS: &[(&str, &str)] = &[
    ("MM:SS", "1:30 for 1 minute 30 seconds"),
    ("HH:MM:SS", "0:01:30"),
    ("Seconds", "90 for 90 seconds, 90.5 for fractions"),
    ("Milliseconds", "5000ms"),
];
