//! Configuration type definitions.

use crate::audio::SampleDepth;
use crate::constants::{DEFAULT_BITS_PER_SAMPLE, DEFAULT_OUTPUT_SUFFIX};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output naming settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Encoder settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Output naming settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the input stem to build the default output name.
    pub suffix: String,

    /// Output container when `--format` is not given.
    /// Unset means "same as the input file's extension".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            format: None,
        }
    }
}

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output sample depth: 16, 24 or 32 (float).
    pub bits_per_sample: u16,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

impl ExportConfig {
    /// Sample depth for the configured bit count, if it is one the encoder supports.
    pub const fn sample_depth(&self) -> Option<SampleDepth> {
        SampleDepth::from_bits(self.bits_per_sample)
    }
}
