//! Time-indexed segment extraction.
//!
//! Sample indices are computed by truncating `seconds * sample_rate`, never by
//! rounding. Two windows that touch in time can therefore drop or repeat one
//! sample at their shared boundary; existing plots depend on this, so keep it.

use super::{AudioBuffer, SampleRange, TimeRange};
use crate::error::Result;

/// Map a time window onto clamped sample indices.
///
/// Both indices are clamped to `[0, len]`. A window that ends before it starts
/// after clamping collapses to an empty range at `start`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRange`] if the window is negative,
/// non-finite, or reversed.
pub fn sample_range(range: TimeRange, sample_rate: u32, len: usize) -> Result<SampleRange> {
    range.validate()?;

    let rate = f64::from(sample_rate);
    let start = seconds_to_index(range.start_seconds, rate, len);
    let end = seconds_to_index(range.end_seconds, rate, len);

    Ok(SampleRange {
        start,
        end: end.max(start),
    })
}

/// Return the samples of `buffer` that fall inside `range`.
///
/// Windows past the end of the recording yield an empty slice.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRange`] if the window is negative,
/// non-finite, or reversed.
pub fn extract(buffer: &AudioBuffer, range: TimeRange) -> Result<&[f32]> {
    let indices = sample_range(range, buffer.sample_rate(), buffer.len())?;
    Ok(buffer.slice(indices))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn seconds_to_index(seconds: f64, rate: f64, len: usize) -> usize {
    let position = (seconds * rate).floor();
    if position >= len as f64 {
        len
    } else {
        position as usize
    }
}
