use serde_json::json;

use super::*;

fn sample() -> Snapshot {
    serde_json::from_value(json!({
        "discord_user": { "id": "1115674875919597639", "username": "Tan", "avatar": "abc123" },
        "discord_status": "dnd",
        "activities": [
            { "type": 0, "name": "Chess" },
            { "type": 4, "name": "Custom Status", "state": "brb" }
        ]
    }))
    .unwrap()
}

#[test]
fn default_snapshot_is_placeholder() {
    let snapshot = Snapshot::default();
    assert_eq!(snapshot.user, DiscordUser::default());
    assert_eq!(snapshot.status, Status::Offline);
    assert!(snapshot.activities.is_empty());
}

#[test]
fn decodes_lanyard_payload_and_ignores_extra_fields() {
    let snapshot: Snapshot = serde_json::from_value(json!({
        "discord_user": { "username": "Tan", "discriminator": "0", "bot": false },
        "discord_status": "online",
        "activities": [{ "type": 2, "name": "Spotify", "details": "Song", "sync_id": "x" }],
        "listening_to_spotify": true,
        "kv": {}
    }))
    .unwrap();

    assert_eq!(snapshot.user.username.as_deref(), Some("Tan"));
    assert_eq!(snapshot.status, Status::Online);
    assert_eq!(snapshot.activities.len(), 1);
    assert!(snapshot.activities[0].is(ActivityKind::Listening));
    assert_eq!(snapshot.activities[0].details.as_deref(), Some("Song"));
}

#[test]
fn unknown_status_and_activity_codes() {
    let snapshot: Snapshot = serde_json::from_value(json!({
        "discord_status": "invisible",
        "activities": [{ "type": 9, "name": "Future" }, { "name": "Typeless" }]
    }))
    .unwrap();

    assert_eq!(snapshot.status, Status::Offline);
    assert_eq!(snapshot.activities[0].kind, Some(ActivityKind::Other(9)));
    assert_eq!(snapshot.activities[1].kind, None);
}

#[test]
fn merge_of_empty_partial_is_idempotent() {
    let s = sample();
    let empty = PartialSnapshot::default();
    let once = s.merged(&empty);
    assert_eq!(once.merged(&empty), once);
    assert_eq!(once, s);
}

#[test]
fn merge_overrides_only_present_fields() {
    let s = sample();
    let partial: PartialSnapshot = serde_json::from_value(json!({ "discord_status": "idle" })).unwrap();

    let merged = s.merged(&partial);
    assert_eq!(merged.status, Status::Idle);
    assert_eq!(merged.user, s.user);
    assert_eq!(merged.activities, s.activities);
}

#[test]
fn merge_replaces_activities_wholesale() {
    let s = sample();
    let partial: PartialSnapshot =
        serde_json::from_value(json!({ "activities": [{ "type": 0, "name": "Go" }] })).unwrap();

    let merged = s.merged(&partial);
    assert_eq!(merged.activities, vec![Activity::new(ActivityKind::Game, "Go")]);
}

#[test]
fn null_fields_reset_to_defaults() {
    let mut s = sample();
    let partial: PartialSnapshot = serde_json::from_value(json!({
        "discord_user": null,
        "discord_status": null,
        "activities": null
    }))
    .unwrap();
    assert!(!partial.is_empty());

    s.apply(partial);
    assert_eq!(s, Snapshot::default());
}

#[test]
fn apply_matches_merged() {
    let s = sample();
    let partial: PartialSnapshot = serde_json::from_value(json!({
        "discord_user": { "username": "Tanel" },
        "activities": []
    }))
    .unwrap();

    let expected = s.merged(&partial);
    let mut applied = s.clone();
    applied.apply(partial);
    assert_eq!(applied, expected);
    assert_eq!(applied.status, Status::Dnd);
    assert_eq!(applied.user.avatar, None);
}

#[test]
fn non_object_partial_is_rejected() {
    assert!(serde_json::from_value::<PartialSnapshot>(json!(42)).is_err());
}
