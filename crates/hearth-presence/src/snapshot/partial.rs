//! Partial presence updates and the field-wise merge.

use serde::{Deserialize, Deserializer};

use super::types::{Activity, DiscordUser, Snapshot, Status};

/// An incremental update: only the fields that are present get applied.
///
/// A field present with `null` resets to its default; a missing field
/// leaves the snapshot untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialSnapshot {
    #[serde(rename = "discord_user", default, deserialize_with = "present")]
    pub user: Option<DiscordUser>,
    #[serde(rename = "discord_status", default, deserialize_with = "present")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "present")]
    pub activities: Option<Vec<Activity>>,
}

impl PartialSnapshot {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.status.is_none() && self.activities.is_none()
    }
}

impl Snapshot {
    /// Snapshot with every field present in `partial` overwritten.
    ///
    /// `activities` is replaced as a whole, never merged element-wise.
    pub fn merged(&self, partial: &PartialSnapshot) -> Snapshot {
        Snapshot {
            user: partial.user.clone().unwrap_or_else(|| self.user.clone()),
            status: partial.status.unwrap_or(self.status),
            activities: partial
                .activities
                .clone()
                .unwrap_or_else(|| self.activities.clone()),
        }
    }

    /// In-place form of [`Snapshot::merged`].
    pub fn apply(&mut self, partial: PartialSnapshot) {
        if let Some(user) = partial.user {
            self.user = user;
        }
        if let Some(status) = partial.status {
            self.status = status;
        }
        if let Some(activities) = partial.activities {
            self.activities = activities;
        }
    }
}

/// A present field (including `null`) always yields `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}
