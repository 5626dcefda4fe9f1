//! JSON reports for machine-readable output.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::plot::PlotLayout;

/// Summary of a plot command run.
#[derive(Debug, Clone, Serialize)]
pub struct PlotReport {
    /// Source audio file.
    pub audio: PathBuf,
    /// Sampling rate of the source in Hz.
    pub sample_rate: u32,
    /// Channel that was plotted.
    pub channel: usize,
    /// Duration of the loaded channel in seconds.
    pub duration_secs: f64,
    /// Panel arrangement used.
    pub layout: PlotLayout,
    /// Rendered plots, in segment order.
    pub plots: Vec<PlotEntry>,
}

/// One rendered segment.
#[derive(Debug, Clone, Serialize)]
pub struct PlotEntry {
    /// Segment label.
    pub label: String,
    /// Requested start time in seconds.
    pub start_time: f64,
    /// Requested end time in seconds.
    pub end_time: f64,
    /// First sample index included.
    pub start_index: usize,
    /// First sample index excluded.
    pub end_index: usize,
    /// Number of samples plotted.
    pub sample_count: usize,
    /// Written plot file.
    pub output_file: PathBuf,
}

/// Print `value` as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| Error::OutputSerialize { source: e })?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
