//! Non-WAV output by piping raw samples into ffmpeg.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::audio::AudioClip;
use crate::audio::encode::{commit, stage};
use crate::constants::FFMPEG_PROGRAM;
use crate::error::{Error, Result};

/// Check that ffmpeg can be started.
///
/// # Errors
///
/// Returns [`Error::EncoderUnavailable`] when the program is missing or
/// does not run cleanly.
pub fn ensure_ffmpeg() -> Result<()> {
    let unavailable = |source| Error::EncoderUnavailable {
        program: FFMPEG_PROGRAM.to_string(),
        source,
    };

    let status = Command::new(FFMPEG_PROGRAM)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(unavailable)?;

    if status.success() {
        Ok(())
    } else {
        Err(unavailable(std::io::Error::other(format!(
            "'{FFMPEG_PROGRAM} -version' exited with {status}"
        ))))
    }
}

/// Encode `clip` to `path` with the given ffmpeg muxer.
///
/// Samples are streamed as interleaved little-endian f32; the codec is
/// whatever ffmpeg picks by default for the container. Nothing appears at
/// `path` unless ffmpeg exits successfully.
pub fn write_transcoded(path: &Path, clip: &AudioClip, muxer: &str) -> Result<()> {
    let staged = stage(path)?;
    let args = ffmpeg_args(clip, muxer, staged.path());
    debug!("Running {FFMPEG_PROGRAM} {args:?}");

    let mut child = Command::new(FFMPEG_PROGRAM)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::EncoderUnavailable {
            program: FFMPEG_PROGRAM.to_string(),
            source,
        })?;

    // ffmpeg's own error output says more than a broken pipe does
    let piped = child.stdin.take().map(|stdin| send_samples(stdin, clip));

    let output = child.wait_with_output().map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.trim();
        return Err(Error::EncodeFailed {
            path: path.to_path_buf(),
            message: if message.is_empty() {
                format!("{FFMPEG_PROGRAM} exited with {}", output.status)
            } else {
                message.to_string()
            },
        });
    }

    match piped {
        Some(Ok(())) => {}
        Some(Err(source)) => {
            return Err(Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            });
        }
        None => {
            return Err(Error::EncodeFailed {
                path: path.to_path_buf(),
                message: format!("could not open {FFMPEG_PROGRAM} stdin"),
            });
        }
    }

    commit(staged, path)
}

/// Stream samples and close the pipe so ffmpeg sees end of input.
fn send_samples(stdin: impl Write, clip: &AudioClip) -> std::io::Result<()> {
    let mut writer = BufWriter::new(stdin);
    for sample in clip.samples() {
        writer.write_all(&sample.to_le_bytes())?;
    }
    writer.flush()
}

fn ffmpeg_args(clip: &AudioClip, muxer: &str, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-hide_banner",
        "-nostats",
        "-loglevel",
        "error",
        "-f",
        "f32le",
        "-ar",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    args.push(clip.sample_rate().to_string().into());
    args.push("-ac".into());
    args.push(clip.channels().to_string().into());
    args.extend(["-i", "pipe:0", "-y", "-f", muxer].map(OsString::from));
    args.push(output.as_os_str().to_os_string());
    args
}
