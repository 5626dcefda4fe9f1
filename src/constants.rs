//! Application-wide constants.
//!
//! Magic numbers and strings live here so defaults stay consistent between
//! the CLI, the configuration file, and the demo driver.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "birdscope";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "BIRDSCOPE_CONFIG";

/// Channel used when none is requested.
pub const DEFAULT_CHANNEL: usize = 0;

/// Default output directory for rendered plots.
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

/// Extension of rendered plot files.
pub const PLOT_EXTENSION: &str = "html";

/// Spectrogram defaults, matching the classic `specgram` behaviour.
pub mod spectrogram {
    /// FFT length in samples.
    pub const DEFAULT_NFFT: usize = 256;

    /// Overlap between consecutive frames in samples.
    pub const DEFAULT_OVERLAP: usize = 128;

    /// Smallest FFT length accepted.
    pub const MIN_NFFT: usize = 2;

    /// Power floor applied before converting to decibels.
    pub const POWER_FLOOR: f64 = 1e-20;
}

/// Plot figure defaults in pixels.
pub mod plot {
    /// Side-by-side figure size (width, height).
    pub const SIDE_BY_SIDE_SIZE: (usize, usize) = (2000, 500);

    /// Stacked figure size (width, height).
    pub const STACKED_SIZE: (usize, usize) = (1500, 500);

    /// Figure title font size.
    pub const TITLE_FONT_SIZE: usize = 15;

    /// Maximum min/max pairs drawn in the amplitude panel.
    pub const MAX_AMPLITUDE_POINTS: usize = 20_000;

    /// Maximum time columns drawn in the spectrogram panel.
    pub const MAX_SPECTROGRAM_FRAMES: usize = 2_000;

    /// Amplitude panel axis labels.
    pub const AMPLITUDE_X_LABEL: &str = "Sample";
    /// Amplitude panel y-axis label.
    pub const AMPLITUDE_Y_LABEL: &str = "Amplitude";

    /// Spectrogram panel axis labels.
    pub const SPECTROGRAM_X_LABEL: &str = "Time";
    /// Spectrogram panel y-axis label.
    pub const SPECTROGRAM_Y_LABEL: &str = "Frequency";
}

/// Segment list constants.
pub mod segments {
    /// Separator between fields of a `START:END:LABEL` segment spec.
    pub const SPEC_SEPARATOR: char = ':';
}

/// PCM normalization divisors.
pub mod pcm {
    /// 8-bit unsigned midpoint.
    pub const U8_MID: f32 = 128.0;
    /// 16-bit signed full scale.
    pub const I16_NORM: f32 = 32_768.0;
    /// 24-bit signed full scale.
    pub const I24_NORM: f32 = 8_388_608.0;
    /// 32-bit signed full scale.
    pub const I32_NORM: f32 = 2_147_483_648.0;
}
