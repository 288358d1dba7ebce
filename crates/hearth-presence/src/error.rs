/// Failures inside the presence pipeline.
///
/// None of these escape the synchronizer; they are logged and turned into
/// a failure display or a reconnect.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Channel error: {0}")]
    Channel(String),
}
