//! Cutting a time range out of an audio file.
//!
//! [`Trimmer`] loads a clip through an [`audio::Backend`](crate::audio::Backend),
//! clamps the requested range to the clip, and exports the slice. The
//! [`command`] module wires it to the command line, in direct or interactive
//! mode.

mod bounds;
pub mod command;
mod interactive;
mod naming;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::audio::{AudioClip, Backend, NativeBackend};
use crate::error::Result;
use crate::timestamp::format_duration;

pub use bounds::ClipBounds;
pub use interactive::run_interactive;
pub use naming::{
    default_output_path, resolve_format, strip_path_quotes, strip_quotes, with_input_extension,
};

/// Outcome of a successful trim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimReport {
    /// Where the clip was written.
    pub output: PathBuf,
    /// Container format used.
    pub format: String,
    /// Duration of the source clip in milliseconds.
    pub source_duration_ms: u64,
    /// Range that was cut, after clamping.
    pub bounds: ClipBounds,
    /// Duration of the written clip in milliseconds.
    pub duration_ms: u64,
}

/// Loads, clamps, slices and exports clips.
#[derive(Debug, Clone, Default)]
pub struct Trimmer<B = NativeBackend> {
    backend: B,
}

impl<B: Backend> Trimmer<B> {
    /// Create a trimmer on top of a media backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Decode a source file.
    pub fn load(&self, input: &Path) -> Result<AudioClip> {
        info!("Loading audio file: {}", input.display());
        let clip = self.backend.load(input)?;
        info!("Audio duration: {}", format_duration(clip.duration_ms()));
        Ok(clip)
    }

    /// Fail early when the backend cannot write `format`.
    pub fn check_format(&self, format: &str) -> Result<()> {
        self.backend.validate_format(format)
    }

    /// Cut `[start_ms, end_ms)` out of `input` and write it to `output`.
    ///
    /// The start is clamped up to 0 and the end down to the clip duration.
    /// Nothing is written unless the clamped range is non-empty.
    ///
    /// # Errors
    ///
    /// - decode failures from the backend
    /// - [`Error::InvalidRange`](crate::Error::InvalidRange) when the clamped start is not before the end
    /// - encode failures, including an unsupported `format`
    pub fn trim(
        &self,
        input: &Path,
        start_ms: i64,
        end_ms: i64,
        output: &Path,
        format: &str,
    ) -> Result<TrimReport> {
        self.check_format(format)?;
        let clip = self.load(input)?;
        self.cut_and_export(&clip, start_ms, end_ms, output, format)
    }

    /// Same as [`Trimmer::trim`] for a clip that is already in memory.
    pub fn trim_clip(
        &self,
        clip: &AudioClip,
        start_ms: i64,
        end_ms: i64,
        output: &Path,
        format: &str,
    ) -> Result<TrimReport> {
        self.check_format(format)?;
        self.cut_and_export(clip, start_ms, end_ms, output, format)
    }

    fn cut_and_export(
        &self,
        clip: &AudioClip,
        start_ms: i64,
        end_ms: i64,
        output: &Path,
        format: &str,
    ) -> Result<TrimReport> {
        let source_duration_ms = clip.duration_ms();
        let bounds = ClipBounds::clamp(start_ms, end_ms, source_duration_ms)?;

        info!(
            "Extracting from {} to {}",
            format_duration(bounds.start_ms()),
            format_duration(bounds.end_ms())
        );
        let trimmed = clip.slice(bounds.start_ms(), bounds.end_ms());

        info!("Saving trimmed audio to: {}", output.display());
        self.backend.export(&trimmed, output, format)?;

        let duration_ms = trimmed.duration_ms();
        info!("Trimmed clip duration: {}", format_duration(duration_ms));

        Ok(TrimReport {
            output: output.to_path_buf(),
            format: format.to_string(),
            source_duration_ms,
            bounds,
            duration_ms,
        })
    }
}
