//! Output naming and format defaults.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Remove surrounding whitespace, then `"` and `'` quote characters, as left
/// behind by drag-and-drop into a terminal.
pub fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches('"').trim_matches('\'')
}

/// [`strip_quotes`] for a path that did not come from a prompt.
///
/// Paths that are not valid UTF-8, or that carry no quotes, are returned
/// untouched.
pub fn strip_path_quotes(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(text) if strip_quotes(text) != text => PathBuf::from(strip_quotes(text)),
        _ => path,
    }
}

/// Default output file name: `<stem><suffix><.ext>`, relative to the
/// working directory.
///
/// `song.mp3` with suffix `_trimmed` becomes `song_trimmed.mp3`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    name.push(suffix);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    PathBuf::from(name)
}

/// Give `output` the input's extension when it has none of its own.
pub fn with_input_extension(output: PathBuf, input: &Path) -> PathBuf {
    match (output.extension(), input.extension()) {
        (None, Some(extension)) => output.with_extension(extension),
        _ => output,
    }
}

/// Pick the output container: an explicit choice wins, otherwise the input
/// file's extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOutputFormat`] when nothing was chosen and
/// the input has no extension to fall back on.
pub fn resolve_format(explicit: Option<&str>, input: &Path) -> Result<String> {
    if let Some(format) = explicit {
        return Ok(format.trim().trim_start_matches('.').to_string());
    }

    input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .ok_or_else(|| Error::UnsupportedOutputFormat {
            format: "<none>".to_string(),
        })
}
