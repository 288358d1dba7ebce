//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = HearthConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_subject_id() {
    let mut config = HearthConfig::default();
    config.presence.subject_id = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.subject_id is empty"));
}

#[test]
fn catches_non_numeric_subject_id() {
    let mut config = HearthConfig::default();
    config.presence.subject_id = "tan#0001".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("numeric snowflake"));
}

#[test]
fn catches_http_socket_url() {
    let mut config = HearthConfig::default();
    config.presence.socket_url = "https://api.lanyard.rest/socket".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.socket_url"));
}

#[test]
fn catches_reconnect_delay_out_of_range() {
    let mut config = HearthConfig::default();
    config.presence.reconnect_delay_ms = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.reconnect_delay_ms"));
}

#[test]
fn catches_unknown_timezone() {
    let mut config = HearthConfig::default();
    config.clock.timezone = "Europe/Atlantis".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("clock.timezone"));
}

#[test]
fn catches_unknown_theme() {
    let mut config = HearthConfig::default();
    config.theme.default = "frappe".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.default"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = HearthConfig::default();
    config.presence.request_timeout_secs = 0;
    config.theme.default = "dracula".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("presence.request_timeout_secs"));
    assert!(err.contains("theme.default"));
    assert!(err.contains("; "));
}
