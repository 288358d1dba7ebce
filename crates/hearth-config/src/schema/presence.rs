//! Presence synchronization settings.

use serde::{Deserialize, Serialize};

/// Where presence comes from and how the live subscription behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Discord snowflake of the tracked subject.
    pub subject_id: String,
    /// REST base; the subject id is appended as the last path segment.
    pub rest_url: String,
    /// Gateway WebSocket endpoint.
    pub socket_url: String,
    pub avatar_cdn: String,
    /// Fixed delay before reopening a closed gateway channel (valid range: 100-600000).
    pub reconnect_delay_ms: u64,
    /// Bootstrap request timeout (valid range: 1-120).
    pub request_timeout_secs: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            subject_id: "1115674875919597639".into(),
            rest_url: "https://api.lanyard.rest/v1/users".into(),
            socket_url: "wss://api.lanyard.rest/socket".into(),
            avatar_cdn: "https://cdn.discordapp.com".into(),
            reconnect_delay_ms: 5000,
            request_timeout_secs: 10,
        }
    }
}
