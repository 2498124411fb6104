//! Trim command execution.

use std::path::{Path, PathBuf};

use crate::Error;
use crate::audio::{Backend, NativeBackend, SampleDepth};
use crate::cli::{Prompter, TrimArgs};
use crate::config::Config;
use crate::error::Result;

use super::{
    TrimReport, Trimmer, default_output_path, resolve_format, run_interactive, strip_quotes,
    with_input_extension,
};

/// Effective trim options after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimSettings {
    /// Explicit output path.
    pub output: Option<PathBuf>,
    /// Explicit output container.
    pub format: Option<String>,
    /// Suffix for the default output name.
    pub suffix: String,
    /// Output sample depth.
    pub depth: SampleDepth,
    /// Hide the decode spinner.
    pub quiet: bool,
}

impl TrimSettings {
    /// Merge command-line flags over the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] when the resulting sample depth is
    /// not one the encoder supports.
    pub fn resolve(args: &TrimArgs, config: &Config) -> Result<Self> {
        let bits = args.bits.unwrap_or(config.export.bits_per_sample);
        let depth = SampleDepth::from_bits(bits).ok_or_else(|| Error::ConfigValidation {
            message: format!("unsupported sample depth: {bits} bits"),
        })?;

        Ok(Self {
            output: args.output.clone(),
            format: args.format.clone().or_else(|| config.output.format.clone()),
            suffix: config.output.suffix.clone(),
            depth,
            quiet: args.quiet,
        })
    }

    /// Output path for `input`: the explicit one or the default name, with
    /// the input's extension added when it has none.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input, &self.suffix));
        with_input_extension(output, input)
    }

    /// Output container for `input`.
    pub fn format_for(&self, input: &Path) -> Result<String> {
        resolve_format(self.format.as_deref(), input)
    }
}

/// Execute a trim run.
///
/// With both `--start` and `--end` the run is non-interactive and prints
/// only the written path; otherwise the user is prompted for whatever is
/// missing.
///
/// # Errors
///
/// Returns the first fatal error; the caller turns it into a non-zero exit.
pub fn execute(input: Option<PathBuf>, args: &TrimArgs, config: &Config) -> Result<()> {
    let settings = TrimSettings::resolve(args, config)?;
    let trimmer = Trimmer::new(NativeBackend::new(settings.depth));
    let mut prompter = Prompter::stdio();

    if let (Some(start), Some(end)) = (args.start, args.end) {
        let input = match input {
            Some(path) => path,
            None => PathBuf::from(strip_quotes(
                &prompter.ask("Enter the path to your audio file: ")?,
            )),
        };

        let report = execute_direct(&trimmer, &input, start, end, &settings)?;
        println!("{}", report.output.display());
        return Ok(());
    }

    run_interactive(&trimmer, input, &settings, &mut prompter).map(|_| ())
}

/// Trim `input` without any prompts.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] for a missing input and otherwise
/// whatever [`Trimmer::trim`] returns.
pub fn execute_direct<B: Backend>(
    trimmer: &Trimmer<B>,
    input: &Path,
    start_ms: i64,
    end_ms: i64,
    settings: &TrimSettings,
) -> Result<TrimReport> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let output = settings.output_path(input);
    let format = settings.format_for(input)?;

    trimmer.trim(input, start_ms, end_ms, &output, &format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
    use tempfile::TempDir;

    fn settings(output: Option<PathBuf>) -> TrimSettings {
        TrimSettings {
            output,
            format: None,
            suffix: "_trimmed".to_string(),
            depth: SampleDepth::Int16,
            quiet: true,
        }
    }

    fn write_silence(path: &Path, seconds: u32) {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for _ in 0..8000 * seconds {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_resolve_prefers_flags_over_config() {
        let mut config = Config::default();
        config.output.format = Some("wav".to_string());
        config.export.bits_per_sample = 24;

        let args = TrimArgs {
            format: Some("wave".to_string()),
            bits: Some(32),
            ..TrimArgs::default()
        };
        let resolved = TrimSettings::resolve(&args, &config).unwrap();
        assert_eq!(resolved.format.as_deref(), Some("wave"));
        assert_eq!(resolved.depth, SampleDepth::Float32);

        let resolved = TrimSettings::resolve(&TrimArgs::default(), &config).unwrap();
        assert_eq!(resolved.format.as_deref(), Some("wav"));
        assert_eq!(resolved.depth, SampleDepth::Int24);
    }

    #[test]
    fn test_resolve_rejects_bad_bits() {
        let mut config = Config::default();
        config.export.bits_per_sample = 12;
        assert!(matches!(
            TrimSettings::resolve(&TrimArgs::default(), &config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_output_path_defaults() {
        let input = Path::new("/data/song.wav");
        assert_eq!(
            settings(None).output_path(input),
            PathBuf::from("song_trimmed.wav")
        );
        assert_eq!(
            settings(Some(PathBuf::from("/tmp/clip"))).output_path(input),
            PathBuf::from("/tmp/clip.wav")
        );
    }

    #[test]
    fn test_direct_trim_writes_clip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ten.wav");
        let output = dir.path().join("cut.wav");
        write_silence(&input, 10);

        let report = execute_direct(
            &Trimmer::new(NativeBackend::default()),
            &input,
            2000,
            8000,
            &settings(Some(output.clone())),
        )
        .unwrap();

        assert_eq!(report.duration_ms, 6000);
        let reader = WavReader::open(&output).unwrap();
        assert_eq!(reader.duration(), 6 * 8000);
    }

    #[test]
    fn test_direct_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = execute_direct(
            &Trimmer::new(NativeBackend::default()),
            &dir.path().join("missing.wav"),
            0,
            1000,
            &settings(Some(dir.path().join("out.wav"))),
        );
        assert!(matches!(result, Err(Error::InputNotFound { .. })));
    }

    #[test]
    fn test_direct_inverted_range_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ten.wav");
        let output = dir.path().join("cut.wav");
        write_silence(&input, 10);

        let result = execute_direct(
            &Trimmer::new(NativeBackend::default()),
            &input,
            8000,
            2000,
            &settings(Some(output.clone())),
        );
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
        assert!(!output.exists());
    }
}
