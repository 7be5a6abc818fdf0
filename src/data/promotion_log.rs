//! Promotion audit log repository.
//!
//! The log is capped at `MAX_LOG_ENTRIES` rows across all guilds. Every append trims the
//! oldest rows beyond the cap.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::log::{LogEntry, NewLogEntry, MAX_LOG_ENTRIES};

pub struct PromotionLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromotionLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry and evicts the oldest entries beyond the cap.
    ///
    /// # Returns
    /// - `Ok(LogEntry)` - The appended entry
    /// - `Err(DbErr)` - Database error during insert or trimming
    pub async fn append(&self, param: NewLogEntry) -> Result<LogEntry, DbErr> {
        let entity = entity::promotion_log::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.map(|id| id.to_string())),
            by_user_id: ActiveValue::Set(param.by_user_id.map(|id| id.to_string())),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.trim(MAX_LOG_ENTRIES).await?;

        LogEntry::from_entity(entity)
    }

    /// Deletes the oldest entries so at most `keep` remain.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries evicted
    /// - `Err(DbErr)` - Database error during count or deletion
    pub async fn trim(&self, keep: u64) -> Result<u64, DbErr> {
        let total = entity::prelude::PromotionLog::find().count(self.db).await?;
        if total <= keep {
            return Ok(0);
        }

        let oldest_ids: Vec<i32> = entity::prelude::PromotionLog::find()
            .select_only()
            .column(entity::promotion_log::Column::Id)
            .order_by_asc(entity::promotion_log::Column::Id)
            .limit(total - keep)
            .into_tuple()
            .all(self.db)
            .await?;

        let result = entity::prelude::PromotionLog::delete_many()
            .filter(entity::promotion_log::Column::Id.is_in(oldest_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the latest `limit` entries of a guild, newest first.
    pub async fn get_recent(&self, guild_id: u64, limit: u64) -> Result<Vec<LogEntry>, DbErr> {
        entity::prelude::PromotionLog::find()
            .filter(entity::promotion_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::promotion_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(LogEntry::from_entity)
            .collect()
    }

    /// Gets the latest `limit` entries about one member, newest first.
    pub async fn get_recent_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<LogEntry>, DbErr> {
        entity::prelude::PromotionLog::find()
            .filter(entity::promotion_log::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_log::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::promotion_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(LogEntry::from_entity)
            .collect()
    }
}
