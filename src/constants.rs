//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "audiotrim";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Suffix appended to the input stem for the default output name.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_trimmed";

/// Default output sample depth in bits.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Sample depths the WAV encoder accepts (32 is written as float).
pub const SUPPORTED_BITS_PER_SAMPLE: [u16; 3] = [16, 24, 32];

/// Width of the banner and separator lines in interactive mode.
pub const RULE_WIDTH: usize = 50;

/// Timestamp grammar constants.
pub mod timestamp {
    /// Suffix marking an integer millisecond value.
    pub const MILLIS_SUFFIX: &str = "ms";

    /// Separator between hour, minute and second fields.
    pub const FIELD_SEPARATOR: char = ':';

    /// Milliseconds per second.
    pub const MS_PER_SECOND: u64 = 1_000;

    /// Milliseconds per minute.
    pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

    /// Milliseconds per hour.
    pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
}

/// Container formats the encoder can write.
pub mod output_formats {
    /// RIFF WAVE.
    pub const WAV: &str = "wav";
    /// Alternate WAVE extension.
    pub const WAVE: &str = "wave";

    /// Formats handed to ffmpeg: (name or extension, ffmpeg muxer).
    pub const TRANSCODED: &[(&str, &str)] = &[
        ("mp3", "mp3"),
        ("flac", "flac"),
        ("ogg", "ogg"),
        ("oga", "ogg"),
        ("opus", "opus"),
        ("m4a", "ipod"),
        ("mp4", "mp4"),
        ("aac", "adts"),
        ("aiff", "aiff"),
        ("aif", "aiff"),
    ];
}

/// External encoder used for everything except WAV.
pub const FFMPEG_PROGRAM: &str = "ffmpeg";
