//! In-memory audio and time window types.

use crate::error::{Error, Result};

/// One channel of decoded audio together with its sampling rate.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from samples and a sampling rate in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] if `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// All samples of the buffer.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Samples covered by `range`, or an empty slice if it lies outside the
    /// buffer.
    pub fn slice(&self, range: SampleRange) -> &[f32] {
        self.samples.get(range.start..range.end).unwrap_or(&[])
    }

    /// Sampling rate in Hz.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// A time window in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    /// Window start in seconds.
    pub start_seconds: f64,
    /// Window end in seconds.
    pub end_seconds: f64,
}

impl TimeRange {
    /// Create a time range without validating it.
    pub const fn new(start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            start_seconds,
            end_seconds,
        }
    }

    /// Check that both ends are finite, non-negative, and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let Self {
            start_seconds: start,
            end_seconds: end,
        } = *self;

        if !start.is_finite() || !end.is_finite() || start < 0.0 || end < 0.0 || start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(())
    }

    /// Window length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// A half-open range of sample indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    /// First included index.
    pub start: usize,
    /// First excluded index.
    pub end: usize,
}

impl SampleRange {
    /// Number of samples covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no samples.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sample_rate_rejected() {
        let result = AudioBuffer::new(vec![0.0; 10], 0);
        assert!(matches!(result, Err(Error::InvalidSampleRate)));
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(vec![0.0; 96_000], 48_000).unwrap();
        assert_eq!(buffer.duration_secs(), 2.0);
        assert_eq!(buffer.len(), 96_000);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_empty_buffer_allowed() {
        let buffer = AudioBuffer::new(Vec::new(), 44_100).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.duration_secs(), 0.0);
    }

    #[test]
    fn test_slice_outside_buffer_is_empty() {
        let buffer = AudioBuffer::new(vec![0.1, 0.2, 0.3, 0.4], 4).unwrap();
        let middle = buffer.slice(SampleRange { start: 1, end: 3 });
        assert_eq!(middle.to_vec(), vec![0.2_f32, 0.3]);
        assert!(buffer.slice(SampleRange { start: 2, end: 9 }).is_empty());
    }

    #[test]
    fn test_validate_accepts_point_range() {
        assert!(TimeRange::new(3.0, 3.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        for range in [
            TimeRange::new(2.0, 1.0),
            TimeRange::new(-1.0, 1.0),
            TimeRange::new(0.0, -0.5),
            TimeRange::new(f64::NAN, 1.0),
            TimeRange::new(0.0, f64::INFINITY),
        ] {
            assert!(
                matches!(range.validate(), Err(Error::InvalidRange { .. })),
                "{range:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sample_range_len() {
        let range = SampleRange { start: 10, end: 25 };
        assert_eq!(range.len(), 15);
        assert!(!range.is_empty());
        assert!(SampleRange { start: 4, end: 4 }.is_empty());
    }
}
