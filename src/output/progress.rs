//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for rendering segments.
///
/// Returns a hidden bar when disabled so callers can update it unconditionally.
pub fn create_segment_progress(total_segments: usize, enabled: bool) -> ProgressBar {
    if !enabled || total_segments == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total_segments as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} segments ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
