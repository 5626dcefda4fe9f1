//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    config
        .spectrogram
        .validate()
        .map_err(|e| Error::ConfigValidation {
            message: e.to_string(),
        })?;
    validate_plot(config)?;
    Ok(())
}

/// Validate figure settings.
fn validate_plot(config: &Config) -> Result<()> {
    let plot = &config.plot;

    for (name, (width, height)) in [
        ("side_by_side_size", plot.side_by_side_size),
        ("stacked_size", plot.stacked_size),
    ] {
        if width == 0 || height == 0 {
            return Err(Error::ConfigValidation {
                message: format!("plot.{name} must be non-zero, got {width}x{height}"),
            });
        }
    }

    Ok(())
}
