//! Activity statistics shown on applications and stored with grants.

use serde::{Deserialize, Serialize};

/// Counters over the last seven UTC days, today included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    pub messages: i64,
    pub voice_minutes: i64,
    pub reactions: i64,
    /// Number of days in the window with any recorded activity.
    pub active_days: i64,
}

/// Snapshot of a member's activity at a point in time.
///
/// Serialized as JSON into the `user_stats_snapshot` column of grants and applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub messages: i64,
    pub voice_minutes: i64,
    pub reactions: i64,
    pub last_7_days: ActivityWindow,
}

impl UserStats {
    /// Reads a stored snapshot, treating an unreadable one as absent.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        let value = value?;

        match serde_json::from_str(value) {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stats snapshot: {}", e);
                None
            }
        }
    }

    /// Formats the snapshot for an embed field.
    pub fn summary(&self) -> String {
        format!(
            "Messages: **{}** ({} this week)\nVoice: **{}h {}m** ({}m this week)\nReactions: **{}** ({} this week)\nActive days this week: **{}/7**",
            self.messages,
            self.last_7_days.messages,
            self.voice_minutes / 60,
            self.voice_minutes % 60,
            self.last_7_days.voice_minutes,
            self.reactions,
            self.last_7_days.reactions,
            self.last_7_days.active_days,
        )
    }
}

/// Which counter an activity event increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Message,
    Reaction,
    VoiceMinutes,
}
