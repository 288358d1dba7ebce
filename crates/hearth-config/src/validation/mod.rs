//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod presence;
mod widgets;

#[cfg(test)]
mod tests;

use crate::schema::HearthConfig;
use hearth_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HearthConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    presence::validate_presence(&mut errors, config);
    widgets::validate_clock(&mut errors, config);
    widgets::validate_theme(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
