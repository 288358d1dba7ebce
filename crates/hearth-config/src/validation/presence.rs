use crate::schema::HearthConfig;

use super::helpers::{validate_range, validate_scheme};

/// Validate the presence section: subject id, endpoints, timings.
pub(crate) fn validate_presence(errors: &mut Vec<String>, config: &HearthConfig) {
    let presence = &config.presence;

    if presence.subject_id.is_empty() {
        errors.push("presence.subject_id is empty".into());
    } else if !presence.subject_id.chars().all(|c| c.is_ascii_digit()) {
        errors.push(format!(
            "presence.subject_id = {:?} must be a numeric snowflake",
            presence.subject_id
        ));
    }

    validate_scheme(errors, "presence.rest_url", &presence.rest_url, &["https://", "http://"]);
    validate_scheme(errors, "presence.socket_url", &presence.socket_url, &["wss://", "ws://"]);
    validate_scheme(errors, "presence.avatar_cdn", &presence.avatar_cdn, &["https://", "http://"]);

    validate_range(
        errors,
        "presence.reconnect_delay_ms",
        presence.reconnect_delay_ms,
        100,
        600_000,
    );
    validate_range(
        errors,
        "presence.request_timeout_secs",
        presence.request_timeout_secs,
        1,
        120,
    );
}
