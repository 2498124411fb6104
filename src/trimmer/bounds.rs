//! Validated clip range.

use crate::error::{Error, Result};

/// A `[start, end)` range in milliseconds that fits inside its source clip.
///
/// Only [`ClipBounds::clamp`] builds one, so `start_ms < end_ms <= duration`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBounds {
    start_ms: u64,
    end_ms: u64,
}

impl ClipBounds {
    /// Clamp a requested range to `[0, duration_ms]` and check its order.
    ///
    /// A negative start becomes 0 and an end past the clip becomes the clip
    /// duration. Neither bound is otherwise adjusted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] (carrying the clamped values) when the
    /// start is not before the end once clamped.
    #[allow(clippy::cast_sign_loss)]
    pub fn clamp(start_ms: i64, end_ms: i64, duration_ms: u64) -> Result<Self> {
        let duration = i64::try_from(duration_ms).unwrap_or(i64::MAX);
        let start = start_ms.max(0);
        let end = end_ms.min(duration);

        if start >= end {
            return Err(Error::InvalidRange {
                start_ms: start,
                end_ms: end,
            });
        }

        // Both are non-negative here: start >= 0 and end > start
        Ok(Self {
            start_ms: start as u64,
            end_ms: end as u64,
        })
    }

    /// Start offset in milliseconds.
    pub const fn start_ms(self) -> u64 {
        self.start_ms
    }

    /// End offset (exclusive) in milliseconds.
    pub const fn end_ms(self) -> u64 {
        self.end_ms
    }

    /// Length of the range in milliseconds.
    pub const fn duration_ms(self) -> u64 {
        self.end_ms - self.start_ms
    }
}
