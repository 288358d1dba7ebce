//! hearth configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hearth_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HearthConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use hearth_common::ConfigError;

/// Load config from the platform default path, then validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<HearthConfig, ConfigError> {
    let config = toml_loader::read_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, then validate it.
pub fn load_config_from(path: &Path) -> Result<HearthConfig, ConfigError> {
    let config = toml_loader::read_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HearthConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&buf);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || Captured(Arc::clone(&writer)))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        (out, logs)
    }

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&HearthConfig::default());
        assert!(json.contains("\"presence\""));
        assert!(json.contains("\"clock\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[clock]\ntimezone = \"Nowhere/Land\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn strict_load_reports_invalid_values_only_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[presence]\nreconnect_delay_ms = 1\n").unwrap();

        let (result, logs) = with_captured_logs(|| load_config_from(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
        assert!(logs.contains("Config loaded"));
        assert!(!logs.contains("invalid values"), "unexpected warning: {logs}");
    }

    #[test]
    fn lenient_load_warns_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[presence]\nreconnect_delay_ms = 1\n").unwrap();

        let (result, logs) = with_captured_logs(|| toml_loader::load_from_path(&path));
        assert_eq!(result.unwrap().presence.reconnect_delay_ms, 1);
        assert_eq!(logs.matches("Config contains invalid values").count(), 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&HearthConfig::default());
        let parsed: HearthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.presence.subject_id, "1115674875919597639");
        assert_eq!(parsed.clock.timezone, "Europe/Tallinn");
    }
}
