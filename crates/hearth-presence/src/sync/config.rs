use std::time::Duration;

use crate::identity::SubjectId;

/// Delay between a gateway closure and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(5000);

/// Settings for one synchronizer.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub subject: SubjectId,
    pub socket_url: String,
    pub avatar_cdn: String,
    /// Fixed, never grows; retries are unbounded.
    pub reconnect_delay: Duration,
}

impl SyncConfig {
    pub fn new(subject: SubjectId) -> Self {
        Self {
            subject,
            socket_url: "wss://api.lanyard.rest/socket".to_string(),
            avatar_cdn: "https://cdn.discordapp.com".to_string(),
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
        }
    }

    pub fn with_socket_url(mut self, url: impl Into<String>) -> Self {
        self.socket_url = url.into();
        self
    }

    pub fn with_avatar_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.avatar_cdn = cdn.into();
        self
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }
}
