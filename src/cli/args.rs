//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use super::validators::parse_segment;
use crate::config::OutputMode;
use crate::plot::PlotLayout;
use crate::segments::Segment;

/// Slice labeled time windows from a recording and plot them.
#[derive(Debug, Parser)]
#[command(name = "birdscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report format on stdout.
    #[arg(
        long,
        value_enum,
        default_value = "human",
        global = true,
        env = "BIRDSCOPE_OUTPUT_MODE"
    )]
    pub output_mode: OutputMode,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render amplitude and spectrogram plots of labeled segments.
    Plot(PlotArgs),
    /// Show stream parameters of an audio file.
    Info {
        /// Audio file to inspect.
        audio: PathBuf,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the plot subcommand.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Source audio file.
    pub audio: PathBuf,

    /// Segment to plot as START:END:LABEL in seconds (repeatable).
    #[arg(short, long, value_name = "START:END:LABEL", value_parser = parse_segment)]
    pub segment: Vec<Segment>,

    /// CSV segment list with columns "Start (s)", "End (s)", "Label" (repeatable).
    #[arg(long = "segments", value_name = "FILE")]
    pub segments_file: Vec<PathBuf>,

    /// Source channel to plot, 0-based (default from config).
    #[arg(short, long, env = "BIRDSCOPE_CHANNEL")]
    pub channel: Option<usize>,

    /// Panel arrangement (default from config).
    #[arg(short, long, value_enum, env = "BIRDSCOPE_LAYOUT")]
    pub layout: Option<PlotLayout>,

    /// Output directory for plots (default from config).
    #[arg(short, long, env = "BIRDSCOPE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
