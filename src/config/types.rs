//! Configuration type definitions.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::audio::SpectrogramConfig;
use crate::constants::{DEFAULT_CHANNEL, DEFAULT_OUTPUT_DIR};
use crate::plot::{PlotLayout, PlotSettings};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings for the plot command.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Spectrogram window settings.
    #[serde(default)]
    pub spectrogram: SpectrogramConfig,

    /// Figure settings.
    #[serde(default)]
    pub plot: PlotSettings,
}

/// Default plot command settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Source channel to plot (0-based).
    pub channel: usize,

    /// Panel arrangement.
    pub layout: PlotLayout,

    /// Directory receiving rendered plots.
    pub output_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            layout: PlotLayout::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// How results are reported on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Log lines and progress bars.
    #[default]
    Human,
    /// A single JSON document per command.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}
