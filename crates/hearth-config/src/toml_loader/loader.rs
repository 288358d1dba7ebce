//! Reading `config.toml` from disk.

use std::io::ErrorKind;
use std::path::Path;

use hearth_common::ConfigError;
use tracing::{info, warn};

use crate::schema::HearthConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse the file at `path` without validating it.
///
/// Absent keys take their defaults.
pub fn read_from_path(path: &Path) -> Result<HearthConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!("{}: {e}", path.display())));
        }
    };

    let config = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))?;
    info!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// [`read_from_path`] on [`default_config_path`], writing the commented
/// template first when there is no file yet.
pub fn read_default() -> Result<HearthConfig, ConfigError> {
    let path = default_config_path()?;
    match read_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(HearthConfig::default())
        }
        loaded => loaded,
    }
}

/// Lenient load: invalid values are logged and the parsed config is
/// returned anyway. [`crate::load_config_from`] rejects them instead.
pub fn load_from_path(path: &Path) -> Result<HearthConfig, ConfigError> {
    read_from_path(path).map(warn_if_invalid)
}

/// Lenient form of [`read_default`].
pub fn load_default() -> Result<HearthConfig, ConfigError> {
    read_default().map(warn_if_invalid)
}

fn warn_if_invalid(config: HearthConfig) -> HearthConfig {
    if let Err(e) = validation::validate(&config) {
        warn!(error = %e, "Config contains invalid values");
    }
    config
}
