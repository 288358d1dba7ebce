//! Two-theme toggle, persisted under a single preference key.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use hearth_common::WidgetError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Mocha,
    Latte,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Mocha => Theme::Latte,
            Theme::Latte => Theme::Mocha,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Mocha => "mocha",
            Theme::Latte => "latte",
        }
    }
}

impl FromStr for Theme {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mocha" => Ok(Theme::Mocha),
            "latte" => Ok(Theme::Latte),
            other => Err(WidgetError::InvalidInput(format!("unknown theme: {other}"))),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small JSON key/value file holding the theme preference.
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/hearth/preferences.json`
    pub fn open_default() -> Result<Self, WidgetError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| WidgetError::Storage("could not determine data directory".into()))?;
        Ok(Self::at(dir.join("hearth").join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or `fallback` when nothing usable is stored.
    pub fn load(&self, fallback: Theme) -> Theme {
        let prefs = self.read_prefs();
        match prefs.get(THEME_KEY).and_then(|v| v.as_str()) {
            Some(name) => name.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme");
                fallback
            }),
            None => fallback,
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), WidgetError> {
        let mut prefs = self.read_prefs();
        prefs.insert(THEME_KEY.to_string(), theme.as_str().into());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WidgetError::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(&prefs)
            .map_err(|e| WidgetError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| {
            WidgetError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })?;

        debug!(theme = %theme, path = %self.path.display(), "saved theme preference");
        Ok(())
    }

    /// Flip the stored theme and persist it. Returns the new theme.
    pub fn toggle(&self, fallback: Theme) -> Result<Theme, WidgetError> {
        let next = self.load(fallback).toggle();
        self.save(next)?;
        Ok(next)
    }

    fn read_prefs(&self) -> serde_json::Map<String, serde_json::Value> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return serde_json::Map::new();
        };
        match serde_json::from_str(&content) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => {
                warn!(path = %self.path.display(), "preferences file is not a JSON object, starting fresh");
                serde_json::Map::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_two_themes() {
        assert_eq!(Theme::Mocha.toggle(), Theme::Latte);
        assert_eq!(Theme::Latte.toggle(), Theme::Mocha);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("latte".parse::<Theme>().unwrap(), Theme::Latte);
        assert!("frappe".parse::<Theme>().is_err());
    }

    #[test]
    fn store_keeps_given_path() {
        let store = ThemeStore::at("/tmp/hearth-prefs.json");
        assert_eq!(store.path(), Path::new("/tmp/hearth-prefs.json"));
    }

    #[test]
    fn missing_file_loads_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("prefs.json"));
        assert_eq!(store.load(Theme::Mocha), Theme::Mocha);
    }

    #[test]
    fn toggle_persists_across_stores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = ThemeStore::at(&path);
        assert_eq!(store.toggle(Theme::Mocha).unwrap(), Theme::Latte);

        let reopened = ThemeStore::at(&path);
        assert_eq!(reopened.load(Theme::Mocha), Theme::Latte);
        assert_eq!(reopened.toggle(Theme::Mocha).unwrap(), Theme::Mocha);
    }

    #[test]
    fn corrupt_file_loads_fallback_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let store = ThemeStore::at(&path);
        assert_eq!(store.load(Theme::Latte), Theme::Latte);
        store.save(Theme::Mocha).unwrap();
        assert_eq!(store.load(Theme::Latte), Theme::Mocha);
    }

    #[test]
    fn save_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"other": 1, "theme": "mocha"}"#).unwrap();

        ThemeStore::at(&path).save(Theme::Latte).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["other"], 1);
        assert_eq!(written["theme"], "latte");
    }
}
