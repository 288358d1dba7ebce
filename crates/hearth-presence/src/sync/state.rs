use std::fmt;

/// Lifecycle of a [`PresenceSynchronizer`](super::PresenceSynchronizer).
///
/// ```text
/// Idle -> Bootstrapping -> Connecting -> Streaming -> ReconnectScheduled -> Connecting ...
///              \
///               -> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Bootstrapping,
    Connecting,
    Streaming,
    ReconnectScheduled,
    /// Terminal for the session.
    Failed,
}

impl SyncState {
    pub fn is_terminal(self) -> bool {
        self == SyncState::Failed
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncState::Idle => "idle",
            SyncState::Bootstrapping => "bootstrapping",
            SyncState::Connecting => "connecting",
            SyncState::Streaming => "streaming",
            SyncState::ReconnectScheduled => "reconnect-scheduled",
            SyncState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_is_terminal() {
        assert!(SyncState::Failed.is_terminal());
        for state in [
            SyncState::Idle,
            SyncState::Bootstrapping,
            SyncState::Connecting,
            SyncState::Streaming,
            SyncState::ReconnectScheduled,
        ] {
            assert!(!state.is_terminal(), "{state} should not be terminal");
        }
    }
}
