//! Structured command output.

mod progress;
mod report;

pub use progress::create_segment_progress;
pub use report::{PlotEntry, PlotReport, emit_json};
