//! `tokio-tungstenite` implementation of the gateway channel.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::error::PresenceError;

use super::channel::{ChannelConnector, GatewayChannel};

/// Connects to the gateway over WebSocket.
#[derive(Debug, Clone)]
pub struct WsConnector {
    connect_timeout: Duration,
}

impl Default for WsConnector {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
        }
    }
}

impl WsConnector {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

#[async_trait]
impl ChannelConnector for WsConnector {
    type Channel = WsChannel;

    async fn open(&self, url: &str) -> Result<WsChannel, PresenceError> {
        info!(url = %url, "Connecting to presence gateway");

        match tokio::time::timeout(self.connect_timeout, tokio_tungstenite::connect_async(url)).await
        {
            Ok(Ok((stream, _))) => Ok(WsChannel { stream }),
            Ok(Err(e)) => Err(PresenceError::Channel(format!("connection failed: {e}"))),
            Err(_elapsed) => Err(PresenceError::Channel(format!(
                "connection timed out after {}s",
                self.connect_timeout.as_secs()
            ))),
        }
    }
}

/// An open gateway WebSocket.
pub struct WsChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl GatewayChannel for WsChannel {
    async fn send_text(&mut self, text: String) -> Result<(), PresenceError> {
        self.stream
            .send(WsMessage::Text(text.into()))
            .await
            .map_err(|e| PresenceError::Channel(e.to_string()))
    }

    async fn next_text(&mut self) -> Option<String> {
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(WsMessage::Text(text)) => return Some(text.as_str().to_owned()),
                Ok(WsMessage::Close(frame)) => {
                    info!(frame = ?frame, "Presence gateway closed connection");
                    return None;
                }
                Ok(other) => {
                    debug!(len = other.len(), "Ignoring non-text gateway frame");
                }
                Err(e) => {
                    warn!(error = %e, "Gateway WebSocket error");
                    return None;
                }
            }
        }
        None
    }
}
