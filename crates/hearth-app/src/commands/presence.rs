use std::time::Duration;

use hearth_common::HearthError;
use hearth_config::HearthConfig;
use hearth_presence::{
    PresenceSynchronizer, RestClient, SubjectId, SyncConfig, SyncState, WsConnector,
};
use tracing::info;

use crate::terminal::TerminalSink;

pub async fn run(config: &HearthConfig) -> Result<(), HearthError> {
    let presence = &config.presence;
    let source = RestClient::new(
        presence.rest_url.as_str(),
        Duration::from_secs(presence.request_timeout_secs),
    )
    .map_err(|e| HearthError::Presence(e.to_string()))?;

    let sync_config = SyncConfig::new(SubjectId::new(presence.subject_id.as_str()))
        .with_socket_url(presence.socket_url.as_str())
        .with_avatar_cdn(presence.avatar_cdn.as_str())
        .with_reconnect_delay(Duration::from_millis(presence.reconnect_delay_ms));

    let mut sync = PresenceSynchronizer::new(
        sync_config,
        source,
        WsConnector::default(),
        TerminalSink::default(),
    );
    let state = sync.state();

    info!(subject = %presence.subject_id, "following presence");
    tokio::select! {
        _ = sync.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            return Ok(());
        }
    }

    let last = *state.borrow();
    info!(state = %last, "presence session ended");
    session_result(last)
}

/// A session that stopped on its own is only clean if it never reached a
/// terminal state.
fn session_result(last: SyncState) -> Result<(), HearthError> {
    if last.is_terminal() {
        return Err(HearthError::Presence(format!(
            "session ended in state {last}"
        )));
    }
    Ok(())
}
