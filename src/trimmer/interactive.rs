//! Prompt-driven trimming.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::audio::{AudioClip, Backend};
use crate::cli::Prompter;
use crate::constants::RULE_WIDTH;
use crate::error::{Error, Result};
use crate::timestamp::{ACCEPTED_FORMATS, format_duration, parse_timestamp};

use super::command::TrimSettings;
use super::{TrimReport, Trimmer, strip_path_quotes, strip_quotes, with_input_extension};

/// Walk the user through a trim.
///
/// Asks for the input path when `input` is `None`, shows the file's
/// duration, then asks for start, end and output name until each answer is
/// usable. Bad timestamps and out-of-range values re-prompt; everything else
/// ends the run.
pub fn run_interactive<B, R, W>(
    trimmer: &Trimmer<B>,
    input: Option<PathBuf>,
    settings: &TrimSettings,
    prompter: &mut Prompter<R, W>,
) -> Result<TrimReport>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);

    prompter.say(&rule)?;
    prompter.say("Audio Trimmer")?;
    prompter.say(&rule)?;

    let input = match input {
        Some(path) => strip_path_quotes(path),
        None => PathBuf::from(strip_quotes(
            &prompter.ask("Enter the path to your audio file: ")?,
        )),
    };

    if !input.exists() {
        return Err(Error::InputNotFound { path: input });
    }

    let format = settings.format_for(&input)?;
    if let Err(e) = trimmer.check_format(&format) {
        prompter.say("Pass --format wav to write a WAV file instead.")?;
        return Err(e);
    }

    let name = input
        .file_name()
        .map_or_else(|| input.display().to_string(), |n| n.to_string_lossy().into_owned());
    prompter.say(format!("\nFile: {name}"))?;
    prompter.say(&thin_rule)?;

    let clip = load_with_spinner(trimmer, &input, settings.quiet)?;
    let duration_ms = clip.duration_ms();
    prompter.say(format!("Total duration: {}", format_duration(duration_ms)))?;

    if duration_ms == 0 {
        return Err(Error::InvalidRange {
            start_ms: 0,
            end_ms: 0,
        });
    }

    prompter.say("\nTimestamp formats supported:")?;
    for (shape, example) in ACCEPTED_FORMATS {
        prompter.say(format!("  - {shape} (e.g., {example})"))?;
    }
    prompter.say(format!("\n{thin_rule}"))?;

    let start_ms = ask_until(
        prompter,
        "Enter start timestamp (or press Enter for beginning): ",
        0,
        |text| check_start(text, duration_ms),
    )?;
    let end_ms = ask_until(
        prompter,
        "Enter end timestamp (or press Enter for end of file): ",
        millis(duration_ms),
        |text| check_end(text, start_ms, duration_ms),
    )?;

    let output = match &settings.output {
        Some(path) => with_input_extension(path.clone(), &input),
        None => ask_output(prompter, settings, &input)?,
    };

    prompter.say(format!("\n{rule}"))?;
    prompter.say("Processing...")?;
    prompter.say(&rule)?;

    match trimmer.trim_clip(&clip, start_ms, end_ms, &output, &format) {
        Ok(report) => {
            prompter.say("✓ Successfully created trimmed audio file!")?;
            prompter.say(format!("  Duration: {}", format_duration(report.duration_ms)))?;
            prompter.say(format!("\n✓ File saved as: {}", report.output.display()))?;
            Ok(report)
        }
        Err(e) => {
            prompter.say("\n✗ Failed to trim audio file")?;
            Err(e)
        }
    }
}

fn load_with_spinner<B: Backend>(
    trimmer: &Trimmer<B>,
    input: &Path,
    quiet: bool,
) -> Result<AudioClip> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        // Template is hardcoded and known to be valid
        #[allow(clippy::expect_used)]
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid progress template"),
        );
        pb.set_message("Decoding audio...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let clip = trimmer.load(input);
    pb.finish_and_clear();
    clip
}

fn ask_output<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    settings: &TrimSettings,
    input: &Path,
) -> Result<PathBuf> {
    let default = settings.output_path(input);
    let answer = prompter.ask(&format!(
        "\nEnter output filename (or press Enter for '{}'): ",
        default.display()
    ))?;

    if answer.is_empty() {
        return Ok(default);
    }
    Ok(with_input_extension(PathBuf::from(strip_quotes(&answer)), input))
}

/// Ask `question` until `check` accepts the answer. An empty answer means `on_empty`.
fn ask_until<R, W, T>(
    prompter: &mut Prompter<R, W>,
    question: &str,
    on_empty: T,
    check: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = prompter.ask(question)?;
        if answer.is_empty() {
            return Ok(on_empty);
        }
        match check(&answer) {
            Ok(value) => return Ok(value),
            Err(problem) => prompter.say(problem)?,
        }
    }
}

/// Start must parse and lie in `[0, duration)`.
fn check_start(text: &str, duration_ms: u64) -> std::result::Result<i64, String> {
    let start = parse_timestamp(text).map_err(|e| retry_message(&e))?;

    if start < 0 || start >= millis(duration_ms) {
        return Err(format!(
            "Start time must be between 0 and {}",
            format_duration(duration_ms)
        ));
    }
    Ok(start)
}

/// End must parse, come after `start_ms`, and not pass the end of the clip.
fn check_end(text: &str, start_ms: i64, duration_ms: u64) -> std::result::Result<i64, String> {
    let end = parse_timestamp(text).map_err(|e| retry_message(&e))?;

    if end <= start_ms {
        return Err(format!(
            "End time must be after start time ({})",
            format_duration(start_ms.unsigned_abs())
        ));
    }
    if end > millis(duration_ms) {
        return Err(format!(
            "End time cannot exceed file duration ({})",
            format_duration(duration_ms)
        ));
    }
    Ok(end)
}

fn retry_message(error: &Error) -> String {
    match error {
        Error::InvalidTimestamp { reason, .. } => {
            format!("Invalid timestamp format ({reason}). Please try again.")
        }
        other => other.to_string(),
    }
}

fn millis(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}
