//! Configuration validation.

use crate::config::Config;
use crate::constants::SUPPORTED_BITS_PER_SAMPLE;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_output(config)?;
    validate_export(config)?;
    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let suffix = &config.output.suffix;

    if suffix.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.suffix must not be empty".to_string(),
        });
    }

    // The suffix lands in a file name, never a path
    if suffix.contains(['/', '\\']) || suffix.contains("..") {
        return Err(Error::ConfigValidation {
            message: format!("output.suffix must be a plain file name fragment, got '{suffix}'"),
        });
    }

    if let Some(format) = &config.output.format
        && format.trim().is_empty()
    {
        return Err(Error::ConfigValidation {
            message: "output.format must not be empty when set".to_string(),
        });
    }

    Ok(())
}

fn validate_export(config: &Config) -> Result<()> {
    let bits = config.export.bits_per_sample;

    if config.export.sample_depth().is_none() {
        return Err(Error::ConfigValidation {
            message: format!(
                "export.bits_per_sample must be one of {SUPPORTED_BITS_PER_SAMPLE:?}, got {bits}"
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_suffix() {
        let mut config = Config::default();
        config.output.suffix = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_suffix_with_path_separator() {
        let mut config = Config::default();
        config.output.suffix = "/../etc".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_blank_format() {
        let mut config = Config::default();
        config.output.format = Some(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_unsupported_bits() {
        let mut config = Config::default();
        config.export.bits_per_sample = 8;
        assert!(validate_config(&config).is_err());

        config.export.bits_per_sample = 24;
        assert!(validate_config(&config).is_ok());
    }
}
