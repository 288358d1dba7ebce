//! Validation for the clock and theme sections.

use crate::schema::{HearthConfig, BUILT_IN_THEMES};

/// The clock timezone must be a known IANA name.
pub(crate) fn validate_clock(errors: &mut Vec<String>, config: &HearthConfig) {
    if config.clock.timezone.parse::<chrono_tz::Tz>().is_err() {
        errors.push(format!(
            "clock.timezone = {:?} is not a known IANA timezone",
            config.clock.timezone
        ));
    }
}

pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &HearthConfig) {
    if !BUILT_IN_THEMES.contains(&config.theme.default.as_str()) {
        errors.push(format!(
            "theme.default = {:?} must be one of {}",
            config.theme.default,
            BUILT_IN_THEMES.join(", ")
        ));
    }
}
