//! The synchronizer state machine.

use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::gateway::protocol::{self, GatewayEvent};
use crate::gateway::{ChannelConnector, GatewayChannel};
use crate::render::{FailureDisplay, PresenceSink};
use crate::rest::{Bootstrap, PresenceSource};
use crate::store::PresenceStore;
use crate::view::derive_view;

use super::config::SyncConfig;
use super::state::SyncState;

/// Keeps a [`PresenceStore`] current and publishes a view after every
/// accepted update.
///
/// Holds at most one bootstrap request and one gateway channel at a time.
/// All failures are handled here; nothing is returned to the caller.
pub struct PresenceSynchronizer<S, C, K> {
    config: SyncConfig,
    store: PresenceStore,
    source: S,
    connector: C,
    sink: K,
    state_tx: watch::Sender<SyncState>,
}

impl<S, C, K> PresenceSynchronizer<S, C, K>
where
    S: PresenceSource,
    C: ChannelConnector,
    K: PresenceSink,
{
    pub fn new(config: SyncConfig, source: S, connector: C, sink: K) -> Self {
        let (state_tx, _) = watch::channel(SyncState::Idle);
        Self {
            config,
            store: PresenceStore::new(),
            source,
            connector,
            sink,
            state_tx,
        }
    }

    /// Observe state transitions.
    pub fn state(&self) -> watch::Receiver<SyncState> {
        self.state_tx.subscribe()
    }

    pub fn store(&self) -> &PresenceStore {
        &self.store
    }

    /// Drive the session.
    ///
    /// Returns only if bootstrap fails; after a successful bootstrap the
    /// subscription is reopened forever. Drop the future to stop.
    pub async fn run(&mut self) {
        self.transition(SyncState::Bootstrapping);
        if !self.bootstrap().await {
            return;
        }

        loop {
            self.transition(SyncState::Connecting);
            self.stream().await;

            self.transition(SyncState::ReconnectScheduled);
            info!(
                delay_ms = self.config.reconnect_delay.as_millis() as u64,
                "Reconnecting to presence gateway"
            );
            tokio::time::sleep(self.config.reconnect_delay).await;
        }
    }

    // -----------------------------------------------------------------------
    // Bootstrap
    // -----------------------------------------------------------------------

    /// One-shot fetch. `true` when the store was seeded.
    async fn bootstrap(&mut self) -> bool {
        let envelope = match self.source.fetch(&self.config.subject).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Presence bootstrap failed");
                return self.fail(FailureDisplay::GENERIC).await;
            }
        };

        match envelope.classify() {
            Bootstrap::Ready(snapshot) => {
                self.store.replace(snapshot);
                self.publish().await;
                true
            }
            Bootstrap::NotObservable => {
                warn!(subject = %self.config.subject, "Subject is not monitored by the presence service");
                self.fail(FailureDisplay::NOT_OBSERVABLE).await
            }
            Bootstrap::Rejected { code } => {
                warn!(code = ?code, "Presence bootstrap rejected");
                self.fail(FailureDisplay::GENERIC).await
            }
            Bootstrap::Empty => {
                warn!("Presence bootstrap succeeded without data");
                self.fail(FailureDisplay::GENERIC).await
            }
        }
    }

    async fn fail(&mut self, display: FailureDisplay) -> bool {
        self.sink.show_failure(&display).await;
        self.transition(SyncState::Failed);
        false
    }

    // -----------------------------------------------------------------------
    // Subscription
    // -----------------------------------------------------------------------

    /// Open one channel, subscribe, and apply updates until it closes.
    async fn stream(&mut self) {
        let mut channel = match self.connector.open(&self.config.socket_url).await {
            Ok(channel) => channel,
            Err(e) => {
                warn!(error = %e, "Failed to open presence gateway");
                return;
            }
        };

        let subscribe = protocol::subscribe_message(&self.config.subject);
        if let Err(e) = channel.send_text(subscribe).await {
            warn!(error = %e, "Failed to subscribe on presence gateway");
            return;
        }
        self.transition(SyncState::Streaming);

        let mut heartbeat: Option<Interval> = None;
        loop {
            tokio::select! {
                inbound = channel.next_text() => {
                    let Some(text) = inbound else { break };
                    match protocol::parse_frame(&text) {
                        GatewayEvent::Hello { heartbeat_interval } => {
                            debug!(interval_ms = heartbeat_interval.as_millis() as u64, "Gateway hello");
                            let mut timer = tokio::time::interval_at(
                                Instant::now() + heartbeat_interval,
                                heartbeat_interval,
                            );
                            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                            heartbeat = Some(timer);
                        }
                        GatewayEvent::InitState(update) | GatewayEvent::PresenceUpdate(update) => {
                            self.store.merge(update);
                            self.publish().await;
                        }
                        GatewayEvent::Malformed(reason) => {
                            warn!(reason = %reason, "Dropping malformed presence update");
                        }
                        GatewayEvent::Ignored => {}
                    }
                }
                _ = next_beat(&mut heartbeat) => {
                    if let Err(e) = channel.send_text(protocol::heartbeat_message()).await {
                        warn!(error = %e, "Gateway heartbeat failed");
                        break;
                    }
                }
            }
        }

        info!("Presence gateway channel closed");
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn publish(&mut self) {
        let view = derive_view(
            self.store.current(),
            &self.config.subject,
            &self.config.avatar_cdn,
        );
        debug!(
            status = %view.status_class,
            activity = %view.activity_line,
            "Presence view updated"
        );
        self.sink.show_presence(&view).await;
    }

    fn transition(&self, next: SyncState) {
        let previous = self.state_tx.send_replace(next);
        debug!(from = %previous, to = %next, "Presence sync state");
    }
}

/// Resolves on the next heartbeat tick; never, before the server's hello.
async fn next_beat(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
