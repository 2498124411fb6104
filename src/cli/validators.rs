//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::SUPPORTED_BITS_PER_SAMPLE;
use crate::timestamp::parse_timestamp;

/// Parse a timestamp argument into milliseconds.
pub fn parse_timestamp_arg(s: &str) -> Result<i64, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

/// Parse and validate an output sample depth.
pub fn parse_bits(s: &str) -> Result<u16, String> {
    let value: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !SUPPORTED_BITS_PER_SAMPLE.contains(&value) {
        return Err(format!(
            "bits must be one of {SUPPORTED_BITS_PER_SAMPLE:?}, got {value}"
        ));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_arg_valid() {
        assert_eq!(parse_timestamp_arg("5000ms"), Ok(5000));
        assert_eq!(parse_timestamp_arg("1:30"), Ok(90_000));
    }

    #[test]
    fn test_parse_timestamp_arg_invalid() {
        let err = parse_timestamp_arg("abc").unwrap_err();
        assert!(err.contains("invalid timestamp 'abc'"));
    }

    #[test]
    fn test_parse_bits_valid() {
        assert_eq!(parse_bits("16"), Ok(16));
        assert_eq!(parse_bits("24"), Ok(24));
        assert_eq!(parse_bits("32"), Ok(32));
    }

    #[test]
    fn test_parse_bits_invalid() {
        assert!(parse_bits("8").unwrap_err().contains("bits must be one of"));
        assert!(parse_bits("x").unwrap_err().contains("not a valid number"));
    }
}
