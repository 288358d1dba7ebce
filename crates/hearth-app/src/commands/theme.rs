use hearth_common::HearthError;
use hearth_config::HearthConfig;
use hearth_widgets::{Theme, ThemeStore};
use tracing::{debug, warn};

use crate::cli::ThemeAction;

pub fn run(config: &HearthConfig, action: Option<ThemeAction>) -> Result<(), HearthError> {
    let fallback = config.theme.default.parse::<Theme>().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to the default theme");
        Theme::default()
    });
    let store = ThemeStore::open_default()?;
    debug!(path = %store.path().display(), "theme preference file");

    let theme = match action {
        Some(ThemeAction::Toggle) => store.toggle(fallback)?,
        None => store.load(fallback),
    };
    println!("{theme}");
    Ok(())
}
