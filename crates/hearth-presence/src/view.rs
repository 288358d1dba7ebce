//! Pure derivation of the displayable presence fields.

use crate::identity::SubjectId;
use crate::snapshot::{Activity, ActivityKind, Snapshot};

/// Activity line shown when nothing more specific applies.
pub const FALLBACK_ACTIVITY: &str = "Chilling";

/// Display fields derived from one snapshot.
///
/// `None` for `avatar_url` or `display_name` means "keep what is shown";
/// a missing avatar or name never blanks the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceView {
    pub avatar_url: Option<String>,
    pub display_name: Option<String>,
    pub status_class: String,
    pub activity_line: String,
}

/// Derive the view for `snapshot`.
pub fn derive_view(snapshot: &Snapshot, subject: &SubjectId, avatar_cdn: &str) -> PresenceView {
    PresenceView {
        avatar_url: non_empty(&snapshot.user.avatar).map(|hash| avatar_url(avatar_cdn, subject, hash)),
        display_name: non_empty(&snapshot.user.username).map(str::to_string),
        status_class: snapshot.status.as_str().to_string(),
        activity_line: activity_line(&snapshot.activities),
    }
}

/// `<cdn>/avatars/<subject>/<hash>.png`
pub fn avatar_url(avatar_cdn: &str, subject: &SubjectId, hash: &str) -> String {
    format!(
        "{}/avatars/{}/{}.png",
        avatar_cdn.trim_end_matches('/'),
        subject,
        hash
    )
}

/// Pick the status line by fixed rule priority, independent of order:
/// custom status text, then game, then listening, then the fallback.
pub fn activity_line(activities: &[Activity]) -> String {
    if let Some(text) = activities
        .iter()
        .filter(|a| a.is(ActivityKind::CustomStatus))
        .find_map(|a| non_empty(&a.state))
    {
        return text.to_string();
    }

    if let Some(game) = activities.iter().find(|a| a.is(ActivityKind::Game)) {
        return format!("Playing {}", game.name);
    }

    if let Some(listening) = activities.iter().find(|a| a.is(ActivityKind::Listening)) {
        let what = non_empty(&listening.details).unwrap_or(listening.name.as_str());
        return format!("Listening to {what}");
    }

    FALLBACK_ACTIVITY.to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DiscordUser, Status};

    fn subject() -> SubjectId {
        SubjectId::new("1115674875919597639")
    }

    #[test]
    fn custom_status_wins_regardless_of_order() {
        let activities = vec![
            Activity::new(ActivityKind::Game, "Chess"),
            Activity::new(ActivityKind::CustomStatus, "Custom Status").with_state("brb"),
        ];
        assert_eq!(activity_line(&activities), "brb");
    }

    #[test]
    fn empty_custom_status_falls_through_to_game() {
        let activities = vec![
            Activity::new(ActivityKind::CustomStatus, "Custom Status").with_state(""),
            Activity::new(ActivityKind::Game, "Chess"),
        ];
        assert_eq!(activity_line(&activities), "Playing Chess");
    }

    #[test]
    fn game_beats_listening() {
        let activities = vec![
            Activity::new(ActivityKind::Listening, "Spotify").with_details("Song"),
            Activity::new(ActivityKind::Game, "Factorio"),
        ];
        assert_eq!(activity_line(&activities), "Playing Factorio");
    }

    #[test]
    fn listening_uses_details() {
        let activities = vec![Activity::new(ActivityKind::Listening, "Spotify").with_details("Heroes")];
        assert_eq!(activity_line(&activities), "Listening to Heroes");
    }

    #[test]
    fn listening_falls_back_to_name_when_details_empty() {
        let activities = vec![Activity::new(ActivityKind::Listening, "Song").with_details("")];
        assert_eq!(activity_line(&activities), "Listening to Song");
    }

    #[test]
    fn empty_activities_yield_fallback() {
        assert_eq!(activity_line(&[]), "Chilling");
    }

    #[test]
    fn uninterpreted_kinds_yield_fallback() {
        let activities = vec![
            Activity::new(ActivityKind::Watching, "YouTube"),
            Activity::new(ActivityKind::Other(7), "Something"),
        ];
        assert_eq!(activity_line(&activities), FALLBACK_ACTIVITY);
    }

    #[test]
    fn view_of_full_snapshot() {
        let snapshot = Snapshot {
            user: DiscordUser {
                username: Some("Tan".into()),
                avatar: Some("a1b2c3".into()),
                ..Default::default()
            },
            status: Status::Online,
            activities: vec![],
        };

        let view = derive_view(&snapshot, &subject(), "https://cdn.discordapp.com/");
        assert_eq!(
            view.avatar_url.as_deref(),
            Some("https://cdn.discordapp.com/avatars/1115674875919597639/a1b2c3.png")
        );
        assert_eq!(view.display_name.as_deref(), Some("Tan"));
        assert_eq!(view.status_class, "online");
        assert_eq!(view.activity_line, "Chilling");
    }

    #[test]
    fn view_of_placeholder_keeps_previous_identity() {
        let view = derive_view(&Snapshot::default(), &subject(), "https://cdn.discordapp.com");
        assert_eq!(view.avatar_url, None);
        assert_eq!(view.display_name, None);
        assert_eq!(view.status_class, "offline");
    }
}
