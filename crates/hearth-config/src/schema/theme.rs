//! Theme selection configuration.

use serde::{Deserialize, Serialize};

/// Themes the toggle cycles between.
pub const BUILT_IN_THEMES: &[&str] = &["mocha", "latte"];

/// Theme used when no preference has been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "mocha".into(),
        }
    }
}
