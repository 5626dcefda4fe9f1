//! Short-time power spectrum for the spectrogram panel.
//!
//! Follows the classic `specgram` recipe: symmetric Hann window, one-sided
//! power spectral density scaled by `fs * sum(w^2)`, shown in decibels.

use std::f64::consts::PI;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::constants::spectrogram::{DEFAULT_NFFT, DEFAULT_OVERLAP, MIN_NFFT, POWER_FLOOR};
use crate::error::{Error, Result};

/// Window settings for the spectrogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    /// FFT length in samples.
    pub nfft: usize,
    /// Overlap between consecutive frames in samples.
    pub overlap: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            nfft: DEFAULT_NFFT,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl SpectrogramConfig {
    /// Check the window settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpectrogramConfig`] if `nfft` is too small or
    /// `overlap` is not shorter than `nfft`.
    pub fn validate(&self) -> Result<()> {
        if self.nfft < MIN_NFFT {
            return Err(Error::InvalidSpectrogramConfig {
                message: format!("nfft must be at least {MIN_NFFT}, got {}", self.nfft),
            });
        }
        if self.overlap >= self.nfft {
            return Err(Error::InvalidSpectrogramConfig {
                message: format!(
                    "overlap ({}) must be smaller than nfft ({})",
                    self.overlap, self.nfft
                ),
            });
        }
        Ok(())
    }

    /// Distance between frame starts in samples.
    pub const fn hop(&self) -> usize {
        self.nfft - self.overlap
    }
}

/// Power spectral density over time.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// Frame centres in seconds.
    pub times: Vec<f64>,
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Power in dB, indexed `[frequency][frame]`.
    pub power_db: Vec<Vec<f64>>,
}

impl Spectrogram {
    /// Number of time frames.
    pub fn frame_count(&self) -> usize {
        self.times.len()
    }
}

/// Compute the spectrogram of `samples`.
///
/// Input shorter than one window is zero-padded to a single frame; empty input
/// produces no frames.
pub fn compute_spectrogram(
    samples: &[f32],
    sample_rate: u32,
    config: &SpectrogramConfig,
) -> Result<Spectrogram> {
    config.validate()?;

    let nfft = config.nfft;
    let hop = config.hop();
    let fs = f64::from(sample_rate);
    let bins = nfft / 2 + 1;

    #[allow(clippy::cast_precision_loss)]
    let frequencies: Vec<f64> = (0..bins).map(|k| k as f64 * fs / nfft as f64).collect();

    if samples.is_empty() {
        return Ok(Spectrogram {
            times: Vec::new(),
            frequencies,
            power_db: vec![Vec::new(); bins],
        });
    }

    let frame_count = if samples.len() <= nfft {
        1
    } else {
        (samples.len() - nfft) / hop + 1
    };

    let window = hann_window(nfft);
    let scale = fs * window.iter().map(|w| w * w).sum::<f64>();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nfft);

    let mut power_db = vec![Vec::with_capacity(frame_count); bins];
    let mut times = Vec::with_capacity(frame_count);
    let mut buffer = vec![Complex::new(0.0, 0.0); nfft];

    for frame in 0..frame_count {
        let offset = frame * hop;

        for (i, slot) in buffer.iter_mut().enumerate() {
            let sample = samples.get(offset + i).copied().map_or(0.0, f64::from);
            *slot = Complex::new(sample * window[i], 0.0);
        }

        fft.process(&mut buffer);

        for (k, row) in power_db.iter_mut().enumerate() {
            let mut power = buffer[k].norm_sqr() / scale;
            let is_nyquist = nfft % 2 == 0 && k == nfft / 2;
            if k != 0 && !is_nyquist {
                power *= 2.0;
            }
            row.push(10.0 * power.max(POWER_FLOOR).log10());
        }

        #[allow(clippy::cast_precision_loss)]
        times.push((offset as f64 + nfft as f64 / 2.0) / fs);
    }

    Ok(Spectrogram {
        times,
        frequencies,
        power_db,
    })
}

/// Symmetric Hann window of length `n`.
#[allow(clippy::cast_precision_loss)]
fn hann_window(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / denom).cos())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn tone(freq: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f64 / f64::from(sample_rate)).sin() as f32)
            .collect()
    }

    #[test]
    fn test_default_matches_specgram() {
        let config = SpectrogramConfig::default();
        assert_eq!(config.nfft, 256);
        assert_eq!(config.overlap, 128);
        assert_eq!(config.hop(), 128);
    }

    #[test]
    fn test_frame_and_bin_counts() {
        let samples = vec![0.0; 1024];
        let spec = compute_spectrogram(&samples, 8_000, &SpectrogramConfig::default()).unwrap();
        // (1024 - 256) / 128 + 1
        assert_eq!(spec.frame_count(), 7);
        assert_eq!(spec.frequencies.len(), 129);
        assert_eq!(spec.power_db.len(), 129);
        assert!(spec.power_db.iter().all(|row| row.len() == 7));
        assert_eq!(spec.frequencies[128], 4_000.0);
        assert_eq!(spec.times[0], 128.0 / 8_000.0);
    }

    #[test]
    fn test_short_input_padded_to_one_frame() {
        let spec =
            compute_spectrogram(&[0.5; 10], 1_000, &SpectrogramConfig::default()).unwrap();
        assert_eq!(spec.frame_count(), 1);
    }

    #[test]
    fn test_empty_input_has_no_frames() {
        let spec = compute_spectrogram(&[], 1_000, &SpectrogramConfig::default()).unwrap();
        assert_eq!(spec.frame_count(), 0);
        assert_eq!(spec.frequencies.len(), 129);
    }

    #[test]
    fn test_silence_hits_power_floor() {
        let spec =
            compute_spectrogram(&[0.0; 512], 1_000, &SpectrogramConfig::default()).unwrap();
        assert!(
            spec.power_db
                .iter()
                .flatten()
                .all(|&db| (db + 200.0).abs() < 1e-9)
        );
    }

    #[test]
    fn test_tone_peaks_at_its_bin() {
        // 1 kHz at 8 kHz with nfft 256 lands exactly on bin 32
        let samples = tone(1_000.0, 8_000, 4_096);
        let spec = compute_spectrogram(&samples, 8_000, &SpectrogramConfig::default()).unwrap();

        let peak_bin = (0..spec.frequencies.len())
            .max_by(|&a, &b| spec.power_db[a][0].total_cmp(&spec.power_db[b][0]))
            .unwrap();
        assert_eq!(peak_bin, 32);
        assert_eq!(spec.frequencies[peak_bin], 1_000.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad = [
            SpectrogramConfig { nfft: 1, overlap: 0 },
            SpectrogramConfig {
                nfft: 256,
                overlap: 256,
            },
        ];
        for config in bad {
            assert!(matches!(
                compute_spectrogram(&[0.0; 10], 1_000, &config),
                Err(Error::InvalidSpectrogramConfig { .. })
            ));
        }
    }

    #[test]
    fn test_hann_window_is_symmetric() {
        let window = hann_window(8);
        assert_eq!(window[0], 0.0);
        for i in 0..4 {
            assert!((window[i] - window[7 - i]).abs() < 1e-12);
        }
    }
}
