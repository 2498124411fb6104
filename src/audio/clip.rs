//! In-memory decoded audio.

/// Decoded audio held entirely in memory.
///
/// Samples are interleaved `f32` in `[-1.0, 1.0]`, `channels` values per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    /// Wrap interleaved samples.
    ///
    /// A trailing partial frame is dropped so every frame is complete.
    #[must_use]
    pub fn new(mut samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1);
        let whole = samples.len() - samples.len() % usize::from(channels);
        samples.truncate(whole);
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count.
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> u64 {
        (self.samples.len() / usize::from(self.channels)) as u64
    }

    /// Duration in whole milliseconds, rounded to the nearest.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        let rate = u64::from(self.sample_rate);
        (self.frames() * 1000 + rate / 2) / rate
    }

    /// Copy out the frames covering `[start_ms, end_ms)`.
    ///
    /// Offsets past the end are clamped to the last frame; an inverted range
    /// yields an empty clip.
    #[must_use]
    pub fn slice(&self, start_ms: u64, end_ms: u64) -> Self {
        let first = self.frame_at(start_ms);
        let last = self.frame_at(end_ms).max(first);
        let width = usize::from(self.channels);

        Self {
            samples: self.samples[first * width..last * width].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn frame_at(&self, ms: u64) -> usize {
        let frame = u128::from(ms) * u128::from(self.sample_rate) / 1000;
        frame.min(u128::from(self.frames())) as usize
    }
}
