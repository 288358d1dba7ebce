//! Lanyard gateway: wire protocol and the WebSocket transport.
//!
//! The synchronizer talks to the transport only through
//! [`ChannelConnector`] / [`GatewayChannel`], so the reconnect policy can be
//! exercised without a network.

mod channel;
mod connection;
pub mod protocol;

pub use channel::{ChannelConnector, GatewayChannel};
pub use connection::{WsChannel, WsConnector};
pub use protocol::GatewayEvent;
