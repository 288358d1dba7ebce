//! Where the config file lives.

use std::path::{Path, PathBuf};

use hearth_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "hearth";
const FILE_NAME: &str = "config.toml";

/// `<config_dir>/hearth/config.toml`, e.g. `~/.config/hearth/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", path, e))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
