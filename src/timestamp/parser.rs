//! Timestamp text to milliseconds.

use crate::constants::timestamp::{FIELD_SEPARATOR, MILLIS_SUFFIX};
use crate::error::{Error, Result};

/// Parse a timestamp and return its offset in milliseconds.
///
/// Accepted shapes, tried in this order:
/// 1. `5000ms` - integer milliseconds
/// 2. `MM:SS` or `HH:MM:SS` - every field may be fractional
/// 3. `90` or `90.5` - seconds
///
/// A bare number is always seconds, however large. Fractional seconds are
/// truncated toward zero when converted to milliseconds, never rounded.
/// Negative values are returned as-is; range checks belong to the caller.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] when the text matches none of the
/// shapes, has a non-numeric field, or does not fit in an `i64`.
pub fn parse_timestamp(text: &str) -> Result<i64> {
    let text = text.trim();

    if let Some(millis) = text.strip_suffix(MILLIS_SUFFIX) {
        return millis.trim().parse::<i64>().map_err(|_| {
            invalid(
                text,
                format!("'{millis}' is not a whole number of milliseconds"),
            )
        });
    }

    if text.contains(FIELD_SEPARATOR) {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        let seconds = match fields.as_slice() {
            [minutes, seconds] => {
                parse_decimal(text, minutes)? * 60.0 + parse_decimal(text, seconds)?
            }
            [hours, minutes, seconds] => {
                parse_decimal(text, hours)? * 3600.0
                    + parse_decimal(text, minutes)? * 60.0
                    + parse_decimal(text, seconds)?
            }
            _ => {
                return Err(invalid(
                    text,
                    format!(
                        "expected MM:SS or HH:MM:SS, found {} fields",
                        fields.len()
                    ),
                ));
            }
        };
        return seconds_to_millis(text, seconds);
    }

    seconds_to_millis(text, parse_decimal(text, text)?)
}

fn parse_decimal(input: &str, field: &str) -> Result<f64> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| invalid(input, format!("'{field}' is not a number")))?;

    if !value.is_finite() {
        return Err(invalid(input, format!("'{field}' is not a finite number")));
    }

    Ok(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn seconds_to_millis(input: &str, seconds: f64) -> Result<i64> {
    let millis = (seconds * 1000.0).trunc();

    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(invalid(input, "value is out of range".to_string()));
    }

    Ok(millis as i64)
}

fn invalid(input: &str, reason: String) -> Error {
    Error::InvalidTimestamp {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_milliseconds_suffix() {
        assert_eq!(parse_timestamp("5000ms").unwrap(), 5000);
        assert_eq!(parse_timestamp("0ms").unwrap(), 0);
        assert_eq!(parse_timestamp(" 250ms ").unwrap(), 250);
    }

    #[test]
    fn test_milliseconds_reject_fractions() {
        assert!(matches!(
            parse_timestamp("1.5ms"),
            Err(Error::InvalidTimestamp { .. })
        ));
        assert!(parse_timestamp("ms").is_err());
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(parse_timestamp("1:30").unwrap(), 90_000);
        assert_eq!(parse_timestamp("0:05.25").unwrap(), 5250);
        assert_eq!(parse_timestamp("90:00").unwrap(), 5_400_000);
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_timestamp("0:01:30").unwrap(), 90_000);
        assert_eq!(parse_timestamp("1:01:01").unwrap(), 3_661_000);
        assert_eq!(parse_timestamp("0.5:0:0").unwrap(), 1_800_000);
    }

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_timestamp("90").unwrap(), 90_000);
        assert_eq!(parse_timestamp("90.5").unwrap(), 90_500);
        assert_eq!(parse_timestamp("0").unwrap(), 0);
    }

    #[test]
    fn test_bare_integer_is_seconds_even_when_large() {
        assert_eq!(parse_timestamp("5000").unwrap(), 5_000_000);
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        // 1.001 * 1000 is 1000.9999999999999 in binary floating point
        assert_eq!(parse_timestamp("1.001").unwrap(), 1000);
        assert_eq!(parse_timestamp("0.0019").unwrap(), 1);
        assert_eq!(parse_timestamp("-0.0019").unwrap(), -1);
    }

    #[test]
    fn test_negative_values_parse() {
        assert_eq!(parse_timestamp("-5").unwrap(), -5000);
        assert_eq!(parse_timestamp("-200ms").unwrap(), -200);
    }

    #[test]
    fn test_rejects_unparseable_text() {
        for text in ["", "   ", "abc", "1:2:3:4", "1:", ":30", "1:xx", "12s"] {
            assert!(
                matches!(parse_timestamp(text), Err(Error::InvalidTimestamp { .. })),
                "expected failure for {text:?}"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_and_overflow() {
        assert!(parse_timestamp("inf").is_err());
        assert!(parse_timestamp("NaN").is_err());
        assert!(parse_timestamp("1e300").is_err());
    }

    #[test]
    fn test_error_keeps_original_input() {
        let err = parse_timestamp("1:2:3:4").unwrap_err();
        match err {
            Error::InvalidTimestamp { input, reason } => {
                assert_eq!(input, "1:2:3:4");
                assert!(reason.contains("4 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
