//! Output encoding: WAV through hound, everything else through ffmpeg.
//!
//! Every writer encodes into a temporary file next to the target and only
//! moves it into place once encoding has finished, so a failure never
//! touches whatever was at the target path before.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::NamedTempFile;

use crate::audio::AudioClip;
use crate::constants::{DEFAULT_BITS_PER_SAMPLE, output_formats};
use crate::error::{Error, Result};

/// Output containers the encoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// RIFF WAVE, written natively.
    Wav,
    /// Any other container, written by ffmpeg with the named muxer.
    Transcoded {
        /// ffmpeg muxer name (`-f`).
        muxer: &'static str,
    },
}

impl OutputFormat {
    /// Resolve a format name or file extension (with or without the dot).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOutputFormat`] for anything the encoder
    /// cannot write.
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized = name.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            output_formats::WAV | output_formats::WAVE => Ok(Self::Wav),
            other => output_formats::TRANSCODED
                .iter()
                .find(|(ext, _)| *ext == other)
                .map(|&(_, muxer)| Self::Transcoded { muxer })
                .ok_or_else(|| Error::UnsupportedOutputFormat {
                    format: name.to_string(),
                }),
        }
    }
}

/// Sample encoding for written files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleDepth {
    /// 16-bit signed integer PCM.
    #[default]
    Int16,
    /// 24-bit signed integer PCM.
    Int24,
    /// 32-bit IEEE float.
    Float32,
}

impl SampleDepth {
    /// Map a bit count to a depth.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            16 => Some(Self::Int16),
            24 => Some(Self::Int24),
            32 => Some(Self::Float32),
            _ => None,
        }
    }

    /// Bits per sample.
    pub const fn bits(self) -> u16 {
        match self {
            Self::Int16 => DEFAULT_BITS_PER_SAMPLE,
            Self::Int24 => 24,
            Self::Float32 => 32,
        }
    }

    const fn sample_format(self) -> SampleFormat {
        match self {
            Self::Int16 | Self::Int24 => SampleFormat::Int,
            Self::Float32 => SampleFormat::Float,
        }
    }
}

/// Create an empty temporary file in the target's directory.
pub(super) fn stage(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    NamedTempFile::new_in(&dir).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Move a fully written staging file onto `path`, replacing what was there.
pub(super) fn commit(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged
        .persist(path)
        .map(|_| ())
        .map_err(|e| Error::OutputWrite {
            path: path.to_path_buf(),
            source: e.error,
        })
}

/// Write a clip to a WAV file.
///
/// Nothing appears at `path` unless the whole file was written.
pub fn write_wav(path: &Path, clip: &AudioClip, depth: SampleDepth) -> Result<()> {
    let staged = stage(path)?;

    write_samples(staged.as_file(), clip, depth).map_err(|source| Error::WavWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    commit(staged, path)
}

#[allow(clippy::cast_possible_truncation)]
fn write_samples(
    file: &File,
    clip: &AudioClip,
    depth: SampleDepth,
) -> std::result::Result<(), hound::Error> {
    let spec = WavSpec {
        channels: clip.channels(),
        sample_rate: clip.sample_rate(),
        bits_per_sample: depth.bits(),
        sample_format: depth.sample_format(),
    };

    let mut writer = WavWriter::new(BufWriter::new(file), spec)?;

    for &sample in clip.samples() {
        let sample = sample.clamp(-1.0, 1.0);
        match depth {
            SampleDepth::Int16 => writer.write_sample((sample * f32::from(i16::MAX)) as i16)?,
            SampleDepth::Int24 => writer.write_sample((sample * 8_388_607.0) as i32)?,
            SampleDepth::Float32 => writer.write_sample(sample)?,
        }
    }

    writer.finalize()
}
