//! Plot the three bird calls of the `pak_birds.wav` field recording.
//!
//! Run with `cargo run --example pak_birds -- [path/to/pak_birds.wav] [out_dir]`.
//! Each call is rendered side by side, then the whole stretch covering all
//! three is rendered stacked.

#![allow(clippy::print_stderr)]

use std::path::PathBuf;

use birdscope::audio::decode_audio_file;
use birdscope::plot::{PlotLayout, Plotter};
use birdscope::segments::{Segment, plot_segments};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> birdscope::Result<()> {
    let mut args = std::env::args().skip(1);
    let audio = args
        .next()
        .map_or_else(|| PathBuf::from("pak_birds.wav"), PathBuf::from);
    let output_dir = args
        .next()
        .map_or_else(|| PathBuf::from("plots"), PathBuf::from);

    let buffer = decode_audio_file(&audio, 0)?;

    let calls = [
        Segment::new("Koel", 165.0, 227.0)?,
        Segment::new("BulBul", 230.0, 282.0)?,
        Segment::new("Lapwing", 290.0, 348.0)?,
    ];
    let plotter = Plotter::new(output_dir, PlotLayout::SideBySide);
    plot_segments(&buffer, &calls, &plotter, true)?;

    let all = [Segment::new("All three birds", 165.0, 348.0)?];
    plot_segments(&buffer, &all, &plotter.with_layout(PlotLayout::Stacked), true)?;

    Ok(())
}
