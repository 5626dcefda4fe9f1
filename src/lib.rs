//! Birdscope - labeled segment plots for audio recordings.
//!
//! This crate loads one channel of a recording, slices caller-chosen time
//! windows out of it with [`audio::extract`], and renders each window as an
//! amplitude plot next to a spectrogram.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod plot;
pub mod segments;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{Config, OutputMode, config_file_path, load_default_config, save_default_config};
use std::path::Path;
use tracing::info;

pub use audio::{AudioBuffer, SampleRange, TimeRange, extract};
pub use error::{Error, Result};

/// Main entry point for the birdscope CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_default_config()?;

    match cli.command {
        Command::Plot(args) => segments::command::execute(&args, &config, cli.output_mode),
        Command::Info { audio } => handle_info_command(&audio, cli.output_mode),
        Command::Config { action } => handle_config_command(action, &config),
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for JSON output.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_info_command(audio: &Path, output_mode: OutputMode) -> Result<()> {
    let info = audio::probe_audio_file(audio)?;

    if output_mode.is_structured() {
        return output::emit_json(&info);
    }

    println!("File:        {}", audio.display());
    println!(
        "Codec:       {}",
        info.codec.as_deref().unwrap_or("unknown")
    );
    println!("Sample rate: {} Hz", info.sample_rate);
    println!("Channels:    {}", info.channels);
    match (info.frames, info.duration_secs) {
        (Some(frames), Some(secs)) => println!("Duration:    {secs:.3}s ({frames} frames)"),
        _ => println!("Duration:    unknown"),
    }
    Ok(())
}

fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                info!("Created configuration file: {}", saved_path.display());
                println!("{}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let contents = toml::to_string_pretty(config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
