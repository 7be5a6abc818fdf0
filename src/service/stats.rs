//! Member activity statistics.
//!
//! Message, reaction and voice activity is counted per member in a totals row and a
//! per-day row. Voice time is measured between a member joining and leaving voice, so the
//! join times are kept in memory by `VoiceSessions` until the member leaves.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    data::UserActivityRepository,
    error::AppError,
    model::stats::{ActivityKind, UserStats},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_message(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        UserActivityRepository::new(self.db)
            .increment(guild_id, user_id, ActivityKind::Message, 1, Utc::now())
            .await?;

        Ok(())
    }

    pub async fn record_reaction(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        UserActivityRepository::new(self.db)
            .increment(guild_id, user_id, ActivityKind::Reaction, 1, Utc::now())
            .await?;

        Ok(())
    }

    /// Adds finished voice time to the member's counters.
    ///
    /// Sessions shorter than a minute are not recorded.
    pub async fn record_voice_minutes(
        &self,
        guild_id: u64,
        user_id: u64,
        minutes: i64,
    ) -> Result<(), AppError> {
        if minutes <= 0 {
            return Ok(());
        }

        UserActivityRepository::new(self.db)
            .increment(guild_id, user_id, ActivityKind::VoiceMinutes, minutes, Utc::now())
            .await?;

        Ok(())
    }

    /// Reads the member's current totals and last seven days.
    pub async fn snapshot(&self, guild_id: u64, user_id: u64) -> Result<UserStats, AppError> {
        let stats = UserActivityRepository::new(self.db)
            .get_stats(guild_id, user_id, Utc::now())
            .await?;

        Ok(stats)
    }
}

/// Join times of members currently in a voice channel.
///
/// Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct VoiceSessions {
    joined: Arc<RwLock<HashMap<(u64, u64), DateTime<Utc>>>>,
}

impl VoiceSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session. A session already in progress keeps its original join time.
    pub async fn join(&self, guild_id: u64, user_id: u64, at: DateTime<Utc>) {
        self.joined
            .write()
            .await
            .entry((guild_id, user_id))
            .or_insert(at);
    }

    /// Ends a session.
    ///
    /// # Returns
    /// - `Some(minutes)` - Whole minutes spent in voice
    /// - `None` - No session was in progress (e.g. the bot started mid-session)
    pub async fn leave(&self, guild_id: u64, user_id: u64, at: DateTime<Utc>) -> Option<i64> {
        let joined_at = self.joined.write().await.remove(&(guild_id, user_id))?;

        Some((at - joined_at).num_minutes().max(0))
    }
}
