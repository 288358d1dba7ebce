//! Configuration schema types for hearth.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the page shipped with.

mod clock;
mod presence;
mod system;
mod theme;

pub use clock::*;
pub use presence::*;
pub use system::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for hearth.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    pub presence: PresenceConfig,
    pub clock: ClockConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_tracks_fixed_subject() {
        let config = HearthConfig::default();
        assert_eq!(config.presence.subject_id, "1115674875919597639");
        assert_eq!(config.presence.reconnect_delay_ms, 5000);
    }

    #[test]
    fn default_config_endpoints() {
        let config = HearthConfig::default();
        assert_eq!(config.presence.rest_url, "https://api.lanyard.rest/v1/users");
        assert_eq!(config.presence.socket_url, "wss://api.lanyard.rest/socket");
        assert_eq!(config.presence.avatar_cdn, "https://cdn.discordapp.com");
    }

    #[test]
    fn default_config_widgets() {
        let config = HearthConfig::default();
        assert_eq!(config.clock.timezone, "Europe/Tallinn");
        assert_eq!(config.theme.default, "mocha");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: HearthConfig = toml::from_str(
            r#"
[presence]
subject_id = "42"
"#,
        )
        .unwrap();
        assert_eq!(config.presence.subject_id, "42");
        assert_eq!(config.presence.socket_url, "wss://api.lanyard.rest/socket");
        assert_eq!(config.clock.timezone, "Europe/Tallinn");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: HearthConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_str(), "debug");
    }
}
