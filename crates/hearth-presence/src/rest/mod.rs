//! One-shot REST bootstrap against `GET /v1/users/<id>`.

mod client;
mod types;

pub use client::{PresenceSource, RestClient};
pub use types::{ApiError, Bootstrap, BootstrapEnvelope, NOT_MONITORED};
