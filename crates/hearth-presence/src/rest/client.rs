//! HTTP client for the bootstrap fetch.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::PresenceError;
use crate::identity::SubjectId;

use super::types::BootstrapEnvelope;

/// Source of the point-in-time presence used to bootstrap.
#[async_trait]
pub trait PresenceSource: Send + Sync {
    async fn fetch(&self, subject: &SubjectId) -> Result<BootstrapEnvelope, PresenceError>;
}

/// Lanyard REST client.
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
}

impl RestClient {
    /// `base_url` is the users collection, e.g. `https://api.lanyard.rest/v1/users`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PresenceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| PresenceError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn user_url(&self, subject: &SubjectId) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), subject)
    }
}

#[async_trait]
impl PresenceSource for RestClient {
    async fn fetch(&self, subject: &SubjectId) -> Result<BootstrapEnvelope, PresenceError> {
        let url = self.user_url(subject);
        debug!(url = %url, "Presence bootstrap request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PresenceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PresenceError::Network(e.to_string()))?;

        decode_envelope(status.as_u16(), &body)
    }
}

/// Decode a bootstrap body.
///
/// The envelope is honoured whatever the HTTP status, since the service
/// reports `user_not_monitored` with a 404. A non-2xx body that is not an
/// envelope is a transport failure.
pub(crate) fn decode_envelope(status: u16, body: &str) -> Result<BootstrapEnvelope, PresenceError> {
    match serde_json::from_str::<BootstrapEnvelope>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(PresenceError::Http {
            status,
            body: body.chars().take(200).collect(),
        }),
        Err(e) => Err(PresenceError::Parse(e.to_string())),
    }
}
