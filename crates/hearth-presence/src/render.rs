//! The rendering side: what a display accepts and how it holds state.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::view::PresenceView;

/// Static display published when bootstrap ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureDisplay {
    pub activity_line: &'static str,
    /// Replacement status class, if the failure dictates one.
    pub status_class: Option<&'static str>,
}

impl FailureDisplay {
    /// The service explicitly reports it does not observe the subject.
    pub const NOT_OBSERVABLE: FailureDisplay = FailureDisplay {
        activity_line: "Join Lanyard Discord!",
        status_class: Some("offline"),
    };

    /// Any other bootstrap failure.
    pub const GENERIC: FailureDisplay = FailureDisplay {
        activity_line: "API Error",
        status_class: None,
    };
}

/// Consumer of derived presence displays.
///
/// Calls are awaited on the synchronizer's task, between reading gateway
/// frames and sending heartbeats. An implementation that blocks for longer
/// than the heartbeat interval delays the heartbeat with it.
#[async_trait]
pub trait PresenceSink: Send {
    async fn show_presence(&mut self, view: &PresenceView);
    async fn show_failure(&mut self, failure: &FailureDisplay);
}

// ---------------------------------------------------------------------------
// Display state
// ---------------------------------------------------------------------------

/// What is currently on screen, built up from successive views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub avatar_url: Option<String>,
    pub display_name: Option<String>,
    pub status_class: String,
    pub activity_line: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            avatar_url: None,
            display_name: None,
            status_class: "offline".to_string(),
            activity_line: String::new(),
        }
    }
}

impl DisplayState {
    /// Apply a view; absent avatar/name leave the current ones in place.
    pub fn apply(&mut self, view: &PresenceView) {
        if let Some(url) = &view.avatar_url {
            self.avatar_url = Some(url.clone());
        }
        if let Some(name) = &view.display_name {
            self.display_name = Some(name.clone());
        }
        self.status_class = view.status_class.clone();
        self.activity_line = view.activity_line.clone();
    }

    pub fn apply_failure(&mut self, failure: &FailureDisplay) {
        self.activity_line = failure.activity_line.to_string();
        if let Some(class) = failure.status_class {
            self.status_class = class.to_string();
        }
    }
}

// ---------------------------------------------------------------------------
// Channel sink
// ---------------------------------------------------------------------------

/// Everything a [`ChannelSink`] forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Presence(PresenceView),
    Failure(FailureDisplay),
}

/// Sink that forwards displays over an mpsc channel, for a UI task to consume.
///
/// The channel is bounded: once `capacity` events are queued, each further
/// display waits for the consumer, and so does the synchronizer's heartbeat.
/// Size it for the slowest expected consumer stall, or drain it promptly.
pub struct ChannelSink {
    tx: mpsc::Sender<SinkEvent>,
}

impl ChannelSink {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<SinkEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl PresenceSink for ChannelSink {
    async fn show_presence(&mut self, view: &PresenceView) {
        let _ = self.tx.send(SinkEvent::Presence(view.clone())).await;
    }

    async fn show_failure(&mut self, failure: &FailureDisplay) {
        let _ = self.tx.send(SinkEvent::Failure(*failure)).await;
    }
}
