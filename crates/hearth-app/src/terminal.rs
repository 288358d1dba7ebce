//! Prints presence displays to stdout.

use async_trait::async_trait;
use hearth_presence::{DisplayState, FailureDisplay, PresenceSink, PresenceView};

/// Keeps the on-screen state and prints a line whenever it changes.
#[derive(Debug, Default)]
pub struct TerminalSink {
    state: DisplayState,
    last_line: Option<String>,
}

impl TerminalSink {
    fn print_if_changed(&mut self) {
        let line = render_line(&self.state);
        if self.last_line.as_deref() != Some(line.as_str()) {
            println!("{line}");
            self.last_line = Some(line);
        }
    }
}

#[async_trait]
impl PresenceSink for TerminalSink {
    async fn show_presence(&mut self, view: &PresenceView) {
        self.state.apply(view);
        if let Some(url) = &self.state.avatar_url {
            tracing::debug!(avatar = %url, "avatar");
        }
        self.print_if_changed();
    }

    async fn show_failure(&mut self, failure: &FailureDisplay) {
        self.state.apply_failure(failure);
        self.print_if_changed();
    }
}

/// `[online] Tan: Playing Chess`
pub fn render_line(state: &DisplayState) -> String {
    match &state.display_name {
        Some(name) => format!("[{}] {}: {}", state.status_class, name, state.activity_line),
        None => format!("[{}] {}", state.status_class, state.activity_line),
    }
}
