//! Live presence for a single Discord subject, sourced from Lanyard.
//!
//! A one-shot REST bootstrap seeds the [`PresenceStore`]; a gateway
//! WebSocket subscription then streams partial updates that are merged into
//! the store. After every accepted update a [`PresenceView`] is derived and
//! handed to a [`PresenceSink`]. The [`PresenceSynchronizer`] owns that
//! whole lifecycle, including the fixed-delay reconnect loop.

pub mod error;
pub mod gateway;
pub mod identity;
pub mod render;
pub mod rest;
pub mod snapshot;
pub mod store;
pub mod sync;
pub mod view;

pub use error::PresenceError;
pub use gateway::{ChannelConnector, GatewayChannel, WsConnector};
pub use identity::SubjectId;
pub use render::{ChannelSink, DisplayState, FailureDisplay, PresenceSink, SinkEvent};
pub use rest::{Bootstrap, BootstrapEnvelope, PresenceSource, RestClient};
pub use snapshot::{Activity, ActivityKind, DiscordUser, PartialSnapshot, Snapshot, Status};
pub use store::PresenceStore;
pub use sync::{PresenceSynchronizer, SyncConfig, SyncState};
pub use view::{derive_view, PresenceView};
