//! Reduction of long segments so plots stay small enough to open.
//!
//! The amplitude panel keeps per-bin min/max pairs; the spectrogram panel
//! collapses runs of adjacent frames into one column holding their peak power.

use crate::audio::Spectrogram;

/// Reduce `samples` to at most `max_points` (index, value) pairs.
///
/// Each bin keeps its minimum and maximum, emitted in sample order, so peaks
/// survive. `max_points == 0` or a short input returns every sample.
pub fn amplitude_points(samples: &[f32], max_points: usize) -> (Vec<usize>, Vec<f32>) {
    if max_points == 0 || samples.len() <= max_points {
        return ((0..samples.len()).collect(), samples.to_vec());
    }

    let bins = (max_points / 2).max(1);
    let mut xs = Vec::with_capacity(bins * 2);
    let mut ys = Vec::with_capacity(bins * 2);

    for (start, end) in bin_ranges(samples.len(), bins) {
        let mut min_idx = start;
        let mut max_idx = start;
        for i in start..end {
            if samples[i] < samples[min_idx] {
                min_idx = i;
            }
            if samples[i] > samples[max_idx] {
                max_idx = i;
            }
        }

        let (first, second) = if min_idx <= max_idx {
            (min_idx, max_idx)
        } else {
            (max_idx, min_idx)
        };
        xs.push(first);
        ys.push(samples[first]);
        if second != first {
            xs.push(second);
            ys.push(samples[second]);
        }
    }

    (xs, ys)
}

/// Collapse `spectrogram` to at most `max_frames` time columns.
///
/// Each column spans adjacent frames, keeps the loudest power of each
/// frequency bin, and is placed at the mean time of its frames.
/// `max_frames == 0` or a short spectrogram is returned unchanged.
pub fn spectrogram_columns(spectrogram: Spectrogram, max_frames: usize) -> Spectrogram {
    let frames = spectrogram.frame_count();
    if max_frames == 0 || frames <= max_frames {
        return spectrogram;
    }

    let ranges = bin_ranges(frames, max_frames);

    #[allow(clippy::cast_precision_loss)]
    let times = ranges
        .iter()
        .map(|&(start, end)| {
            spectrogram.times[start..end].iter().sum::<f64>() / (end - start) as f64
        })
        .collect();

    let power_db = spectrogram
        .power_db
        .iter()
        .map(|row| {
            ranges
                .iter()
                .map(|&(start, end)| {
                    row[start..end]
                        .iter()
                        .copied()
                        .fold(f64::NEG_INFINITY, f64::max)
                })
                .collect()
        })
        .collect();

    Spectrogram {
        times,
        frequencies: spectrogram.frequencies,
        power_db,
    }
}

/// Split `0..len` into `bins` contiguous, non-empty ranges.
fn bin_ranges(len: usize, bins: usize) -> Vec<(usize, usize)> {
    (0..bins)
        .map(|b| (b * len / bins, (b + 1) * len / bins))
        .filter(|(start, end)| end > start)
        .collect()
}
