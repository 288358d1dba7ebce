//! Bootstrap response envelope and its classification.

use serde::Deserialize;

use crate::snapshot::Snapshot;

/// Error code the service returns for subjects it does not observe.
pub const NOT_MONITORED: &str = "user_not_monitored";

/// `{ success, data?, error? }` as returned by the REST endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Snapshot>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// What a decoded envelope means for the synchronizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    /// Success with a payload; seeds the store.
    Ready(Snapshot),
    /// The subject is not observable by the service.
    NotObservable,
    /// Explicit failure with some other (or no) code.
    Rejected { code: Option<String> },
    /// Success flag without a payload.
    Empty,
}

impl BootstrapEnvelope {
    pub fn classify(self) -> Bootstrap {
        if self.success {
            return match self.data {
                Some(snapshot) => Bootstrap::Ready(snapshot),
                None => Bootstrap::Empty,
            };
        }
        match self.error {
            Some(err) if err.code == NOT_MONITORED => Bootstrap::NotObservable,
            Some(err) => Bootstrap::Rejected {
                code: Some(err.code),
            },
            None => Bootstrap::Rejected { code: None },
        }
    }
}
