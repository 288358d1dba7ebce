//! Clock and date text in a fixed timezone.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use hearth_common::WidgetError;

/// Formats instants in one timezone.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    tz: Tz,
}

impl Clock {
    pub fn new(timezone: &str) -> Result<Self, WidgetError> {
        let tz = timezone
            .parse::<Tz>()
            .map_err(|_| WidgetError::Timezone(timezone.to_string()))?;
        Ok(Self { tz })
    }

    /// Zero-padded 24h `HH:MM`.
    pub fn time_text(&self, now: DateTime<Utc>) -> String {
        self.tz.from_utc_datetime(&now.naive_utc()).format("%H:%M").to_string()
    }

    /// Short month and day without padding, e.g. `Oct 6`.
    pub fn date_text(&self, now: DateTime<Utc>) -> String {
        self.tz.from_utc_datetime(&now.naive_utc()).format("%b %-d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let err = Clock::new("Europe/Atlantis").unwrap_err();
        assert!(matches!(err, WidgetError::Timezone(_)));
    }

    #[test]
    fn summer_time_in_tallinn() {
        let clock = Clock::new("Europe/Tallinn").unwrap();
        let now = at("2026-07-01T06:05:00Z");
        assert_eq!(clock.time_text(now), "09:05");
        assert_eq!(clock.date_text(now), "Jul 1");
    }

    #[test]
    fn winter_time_crosses_midnight() {
        let clock = Clock::new("Europe/Tallinn").unwrap();
        let now = at("2026-12-31T22:30:00Z");
        assert_eq!(clock.time_text(now), "00:30");
        assert_eq!(clock.date_text(now), "Jan 1");
    }
}
