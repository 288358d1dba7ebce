//! Presence synchronizer: bootstrap, subscribe, merge, reconnect.

mod config;
mod state;
mod synchronizer;


pub use config::{SyncConfig, DEFAULT_RECONNECT_DELAY};
pub use state::SyncState;
pub use synchronizer::PresenceSynchronizer;
