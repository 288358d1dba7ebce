//! Presence snapshot model and the partial-update merge.

mod partial;
mod types;

#[cfg(test)]
mod tests;

pub use partial::PartialSnapshot;
pub use types::{Activity, ActivityKind, DiscordUser, Snapshot, Status};
