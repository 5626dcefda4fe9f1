//! Where the configuration file lives.
//!
//! `BIRDSCOPE_CONFIG` names a config file directly; otherwise the file is
//! `config.toml` inside the platform config directory for birdscope.

use crate::constants::{APP_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Path of the config file in use.
///
/// # Errors
///
/// Returns [`Error::ConfigDirNotFound`] if no override is set and the
/// platform has no config directory (e.g. `HOME` is unset).
pub fn config_file_path() -> Result<PathBuf> {
    let platform_dir =
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf());
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), platform_dir)
}

fn resolve_config_path(
    override_path: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    match (override_path, platform_dir) {
        (Some(path), _) if !path.as_os_str().is_empty() => Ok(path),
        (_, Some(dir)) => Ok(dir.join(CONFIG_FILE_NAME)),
        _ => Err(Error::ConfigDirNotFound),
    }
}
