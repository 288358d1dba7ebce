//! Gateway wire format.
//!
//! Every frame is `{"op": n, "t"?: "<EVENT>", "d"?: <payload>}`. We send
//! `Initialize` once per connection and `Heartbeat` at the interval the
//! server announces in `Hello`; we act on `INIT_STATE` and
//! `PRESENCE_UPDATE` events and drop everything else.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identity::SubjectId;
use crate::snapshot::PartialSnapshot;

/// Gateway opcodes.
pub mod opcodes {
    pub const EVENT: u64 = 0;
    pub const HELLO: u64 = 1;
    pub const INITIALIZE: u64 = 2;
    pub const HEARTBEAT: u64 = 3;
}

/// Event names carried in `t`.
pub mod events {
    pub const INIT_STATE: &str = "INIT_STATE";
    pub const PRESENCE_UPDATE: &str = "PRESENCE_UPDATE";
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// Inbound frame envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundFrame {
    #[serde(default)]
    pub op: Option<u64>,
    #[serde(default)]
    pub t: Option<String>,
    #[serde(default)]
    pub d: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct OutboundFrame<T: Serialize> {
    op: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    d: Option<T>,
}

#[derive(Debug, Serialize)]
struct Subscribe<'a> {
    subscribe_to_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct Hello {
    heartbeat_interval: u64,
}

/// `{"op":2,"d":{"subscribe_to_id":"<id>"}}`
pub fn subscribe_message(subject: &SubjectId) -> String {
    encode(&OutboundFrame {
        op: opcodes::INITIALIZE,
        d: Some(Subscribe {
            subscribe_to_id: subject.as_str(),
        }),
    })
}

/// `{"op":3}`
pub fn heartbeat_message() -> String {
    encode(&OutboundFrame::<()> {
        op: opcodes::HEARTBEAT,
        d: None,
    })
}

fn encode<T: Serialize>(frame: &T) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(frame).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// What one inbound frame means to the synchronizer.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayEvent {
    Hello { heartbeat_interval: Duration },
    InitState(PartialSnapshot),
    PresenceUpdate(PartialSnapshot),
    /// A recognised event whose payload did not decode.
    Malformed(String),
    /// Anything else: unknown ops, unknown event types, non-JSON text.
    Ignored,
}

/// Interpret one inbound text frame.
pub fn parse_frame(text: &str) -> GatewayEvent {
    let frame: InboundFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            debug!(error = %e, "Unparseable gateway frame");
            return GatewayEvent::Ignored;
        }
    };

    if frame.op == Some(opcodes::HELLO) {
        return match frame.d.map(serde_json::from_value::<Hello>) {
            Some(Ok(hello)) if hello.heartbeat_interval > 0 => GatewayEvent::Hello {
                heartbeat_interval: Duration::from_millis(hello.heartbeat_interval),
            },
            _ => GatewayEvent::Ignored,
        };
    }

    let Some(event) = frame.t.as_deref() else {
        return GatewayEvent::Ignored;
    };
    if event != events::INIT_STATE && event != events::PRESENCE_UPDATE {
        debug!(event = %event, "Unhandled gateway event");
        return GatewayEvent::Ignored;
    }

    let update = match frame.d {
        None | Some(serde_json::Value::Null) => PartialSnapshot::default(),
        Some(payload) => match serde_json::from_value::<PartialSnapshot>(payload) {
            Ok(update) => update,
            Err(e) => return GatewayEvent::Malformed(format!("{event}: {e}")),
        },
    };

    if event == events::INIT_STATE {
        GatewayEvent::InitState(update)
    } else {
        GatewayEvent::PresenceUpdate(update)
    }
}
