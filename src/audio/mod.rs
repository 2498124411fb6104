//! Audio loading, slicing and export.
//!
//! The trimmer only talks to the [`Backend`] trait; [`NativeBackend`] is the
//! real implementation (symphonia in; hound or ffmpeg out).

mod clip;
mod decode;
mod encode;
mod transcode;

use std::path::Path;

use crate::error::Result;

pub use clip::AudioClip;
pub use decode::decode_audio_file;
pub use encode::{OutputFormat, SampleDepth, write_wav};
pub use transcode::{ensure_ffmpeg, write_transcoded};

/// Media capability the trimmer delegates decoding and encoding to.
pub trait Backend {
    /// Decode a whole file into memory.
    fn load(&self, path: &Path) -> Result<AudioClip>;

    /// Encode `clip` to `path` in the named container format.
    fn export(&self, clip: &AudioClip, path: &Path, format: &str) -> Result<()>;

    /// Reject a format before any work is done. Accepts everything by default.
    fn validate_format(&self, _format: &str) -> Result<()> {
        Ok(())
    }
}

/// Decodes with symphonia, writes WAV with hound and other formats with ffmpeg.
///
/// The sample depth applies to WAV output only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend {
    depth: SampleDepth,
}

impl NativeBackend {
    /// Create a backend that writes samples at the given depth.
    #[must_use]
    pub const fn new(depth: SampleDepth) -> Self {
        Self { depth }
    }
}

impl Backend for NativeBackend {
    fn load(&self, path: &Path) -> Result<AudioClip> {
        decode_audio_file(path)
    }

    fn export(&self, clip: &AudioClip, path: &Path, format: &str) -> Result<()> {
        match OutputFormat::from_name(format)? {
            OutputFormat::Wav => write_wav(path, clip, self.depth),
            OutputFormat::Transcoded { muxer } => write_transcoded(path, clip, muxer),
        }
    }

    fn validate_format(&self, format: &str) -> Result<()> {
        match OutputFormat::from_name(format)? {
            OutputFormat::Wav => Ok(()),
            OutputFormat::Transcoded { .. } => ensure_ffmpeg(),
        }
    }
}
