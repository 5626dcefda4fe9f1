//! Figure layout and size settings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::plot::{
    MAX_AMPLITUDE_POINTS, MAX_SPECTROGRAM_FRAMES, SIDE_BY_SIDE_SIZE, STACKED_SIZE,
};

/// How the amplitude and spectrogram panels are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlotLayout {
    /// Amplitude on the left, spectrogram on the right.
    #[default]
    SideBySide,
    /// Amplitude on top, spectrogram below.
    Stacked,
}

impl PlotLayout {
    /// Grid shape as (rows, columns).
    pub const fn grid(self) -> (usize, usize) {
        match self {
            Self::SideBySide => (1, 2),
            Self::Stacked => (2, 1),
        }
    }
}

impl std::fmt::Display for PlotLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SideBySide => write!(f, "side-by-side"),
            Self::Stacked => write!(f, "stacked"),
        }
    }
}

/// Figure sizing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Side-by-side figure size in pixels (width, height).
    pub side_by_side_size: (usize, usize),
    /// Stacked figure size in pixels (width, height).
    pub stacked_size: (usize, usize),
    /// Cap on points drawn in the amplitude panel; 0 draws every sample.
    pub max_amplitude_points: usize,
    /// Cap on time columns in the spectrogram panel; 0 keeps every frame.
    pub max_spectrogram_frames: usize,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            side_by_side_size: SIDE_BY_SIDE_SIZE,
            stacked_size: STACKED_SIZE,
            max_amplitude_points: MAX_AMPLITUDE_POINTS,
            max_spectrogram_frames: MAX_SPECTROGRAM_FRAMES,
        }
    }
}

impl PlotSettings {
    /// Figure size for a layout.
    pub const fn size_for(&self, layout: PlotLayout) -> (usize, usize) {
        match layout {
            PlotLayout::SideBySide => self.side_by_side_size,
            PlotLayout::Stacked => self.stacked_size,
        }
    }
}
