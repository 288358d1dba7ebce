use serde::{Deserialize, Serialize};

/// Clock widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// IANA timezone name the clock is bound to.
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: "Europe/Tallinn".into(),
        }
    }
}
