use async_trait::async_trait;

use crate::error::PresenceError;

/// One open, bidirectional text channel to the gateway.
#[async_trait]
pub trait GatewayChannel: Send {
    async fn send_text(&mut self, text: String) -> Result<(), PresenceError>;

    /// Next inbound text frame, or `None` once the channel has closed for
    /// any reason. Must be cancel-safe: it is raced against the heartbeat.
    async fn next_text(&mut self) -> Option<String>;
}

/// Opens gateway channels.
#[async_trait]
pub trait ChannelConnector: Send + Sync {
    type Channel: GatewayChannel;

    async fn open(&self, url: &str) -> Result<Self::Channel, PresenceError>;
}
