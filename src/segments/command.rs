//! Plot command execution.

use std::collections::HashSet;

use tracing::{info, warn};

use super::{Segment, parse_segment_file};
use crate::audio::{AudioBuffer, decode_audio_file, sample_range};
use crate::cli::PlotArgs;
use crate::config::{Config, OutputMode};
use crate::error::{Error, Result};
use crate::output::{PlotEntry, PlotReport, create_segment_progress, emit_json};
use crate::plot::Plotter;

/// Execute the plot command.
///
/// # Errors
///
/// Returns an error if no segments are given, a segment list cannot be
/// parsed, or the audio cannot be loaded.
pub fn execute(args: &PlotArgs, config: &Config, output_mode: OutputMode) -> Result<()> {
    let segments = collect_segments(args)?;
    if segments.is_empty() {
        return Err(Error::NoSegments);
    }

    let channel = args.channel.unwrap_or(config.defaults.channel);
    let layout = args.layout.unwrap_or(config.defaults.layout);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.defaults.output_dir.clone());

    let buffer = decode_audio_file(&args.audio, channel)?;
    info!(
        "Loaded {} ({:.1}s at {} Hz, channel {channel})",
        args.audio.display(),
        buffer.duration_secs(),
        buffer.sample_rate()
    );

    let plotter = Plotter::new(output_dir.clone(), layout)
        .with_spectrogram(config.spectrogram)
        .with_settings(config.plot);

    let is_json = output_mode.is_structured();
    let plots = plot_segments(&buffer, &segments, &plotter, !is_json)?;

    if is_json {
        return emit_json(&PlotReport {
            audio: args.audio.clone(),
            sample_rate: buffer.sample_rate(),
            channel,
            duration_secs: buffer.duration_secs(),
            layout,
            plots,
        });
    }

    info!(
        "Rendered {} of {} segments to {}",
        plots.len(),
        segments.len(),
        output_dir.display()
    );

    Ok(())
}

/// Extract and render each segment of `buffer`.
///
/// A segment that fails to render is logged and skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if a segment's window is malformed, and
/// [`Error::NoPlotsRendered`] if no segment could be rendered.
pub fn plot_segments(
    buffer: &AudioBuffer,
    segments: &[Segment],
    plotter: &Plotter,
    show_progress: bool,
) -> Result<Vec<PlotEntry>> {
    let pb = create_segment_progress(segments.len(), show_progress);
    let duration = buffer.duration_secs();
    let mut written = HashSet::new();
    let mut entries = Vec::with_capacity(segments.len());
    let mut failed = 0;
    let mut last_error = None;

    for segment in segments {
        pb.set_message(segment.label.clone());

        let indices = sample_range(segment.range, buffer.sample_rate(), buffer.len())?;
        let samples = buffer.slice(indices);

        if samples.is_empty() {
            warn!(
                "Segment '{}' ({:.1}s-{:.1}s) has no samples in a {duration:.1}s recording",
                segment.label, segment.range.start_seconds, segment.range.end_seconds
            );
        } else if segment.range.end_seconds > duration {
            warn!(
                "Segment '{}' ends at {:.1}s, past the end of the recording ({duration:.1}s)",
                segment.label, segment.range.end_seconds
            );
        }

        match plotter.render(&segment.label, samples, buffer.sample_rate()) {
            Ok(path) => {
                if !written.insert(path.clone()) {
                    warn!("Overwrote {} (duplicate label)", path.display());
                }
                pb.println(format!(
                    "  {}: {:.1}s-{:.1}s ({} samples) -> {}",
                    segment.label,
                    segment.range.start_seconds,
                    segment.range.end_seconds,
                    samples.len(),
                    path.display()
                ));
                entries.push(PlotEntry {
                    label: segment.label.clone(),
                    start_time: segment.range.start_seconds,
                    end_time: segment.range.end_seconds,
                    start_index: indices.start,
                    end_index: indices.end,
                    sample_count: samples.len(),
                    output_file: path,
                });
            }
            Err(e) => {
                warn!("Failed to render '{}': {e}", segment.label);
                failed += 1;
                last_error = Some(e);
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");

    if entries.is_empty()
        && let Some(last) = last_error
    {
        return Err(Error::NoPlotsRendered {
            failed,
            last: Box::new(last),
        });
    }

    Ok(entries)
}

/// Gather segments from `--segment` values followed by `--segments` files.
fn collect_segments(args: &PlotArgs) -> Result<Vec<Segment>> {
    let mut segments = args.segment.clone();
    for path in &args.segments_file {
        let parsed = parse_segment_file(path)?;
        info!("Read {} segments from {}", parsed.len(), path.display());
        segments.extend(parsed);
    }
    Ok(segments)
}
