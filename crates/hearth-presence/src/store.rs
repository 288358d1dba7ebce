//! Owned holder of the one presence snapshot.

use crate::snapshot::{PartialSnapshot, Snapshot};

/// Holds the latest known presence of the subject.
///
/// Created with placeholder defaults so a view can always be derived, then
/// replaced by the bootstrap result and merged with every gateway update.
/// Written only by the synchronizer that owns it.
#[derive(Debug, Clone, Default)]
pub struct PresenceStore {
    snapshot: Snapshot,
}

impl PresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the whole snapshot. No validation beyond decoding.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    /// Fold a partial update into the snapshot, field by field.
    pub fn merge(&mut self, partial: PartialSnapshot) {
        self.snapshot.apply(partial);
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshot
    }
}
