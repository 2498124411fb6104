//! Error types for audiotrim.

use std::path::PathBuf;

/// Result type alias for audiotrim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for audiotrim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Input audio file does not exist.
    #[error("file '{path}' not found")]
    InputNotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// Standard input closed while waiting for an answer.
    #[error("input closed before a value was entered")]
    InputClosed,

    /// Timestamp text matched none of the accepted shapes.
    #[error("invalid timestamp '{input}': {reason}")]
    InvalidTimestamp {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Start is not before end once clamped to the clip.
    #[error("start time ({start_ms} ms) must be before end time ({end_ms} ms)")]
    InvalidRange {
        /// Clamped start in milliseconds.
        start_ms: i64,
        /// Clamped end in milliseconds.
        end_ms: i64,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: PathBuf,
    },

    /// Requested output container cannot be encoded.
    #[error(
        "unsupported output format '{format}' (supported: wav, mp3, flac, ogg, opus, m4a, mp4, aac, aiff)"
    )]
    UnsupportedOutputFormat {
        /// The requested format.
        format: String,
    },

    /// The external encoder could not be started.
    #[error("could not run '{program}', which is needed for non-WAV output")]
    EncoderUnavailable {
        /// Program that was looked up.
        program: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The external encoder ran but did not produce a file.
    #[error("failed to encode '{path}': {message}")]
    EncodeFailed {
        /// Target output path.
        path: PathBuf,
        /// What the encoder reported.
        message: String,
    },

    /// Output could not be staged next to, or moved onto, its target path.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Target output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWriteFailed {
        /// Path to the WAV file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },
}
