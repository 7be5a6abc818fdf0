//! Promotion ban repository.
//!
//! At most one ban row exists per member and guild; `create` replaces any previous row.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::promotion::{NewPromotionBan, PromotionBan};

pub struct PromotionBanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromotionBanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a ban, replacing any existing ban row for the member.
    ///
    /// # Returns
    /// - `Ok(PromotionBan)` - The stored ban
    /// - `Err(DbErr)` - Database error during deletion or insert
    pub async fn create(&self, param: NewPromotionBan) -> Result<PromotionBan, DbErr> {
        self.delete(param.guild_id, param.user_id).await?;

        let entity = entity::promotion_ban::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            reason: ActiveValue::Set(param.reason),
            by_user_id: ActiveValue::Set(param.by_user_id.to_string()),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PromotionBan::from_entity(entity)
    }

    /// Finds a member's ban row, whether or not it has lapsed.
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<PromotionBan>, DbErr> {
        entity::prelude::PromotionBan::find()
            .filter(entity::promotion_ban::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_ban::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(PromotionBan::from_entity)
            .transpose()
    }

    /// Finds a member's ban if it still applies at `now`.
    pub async fn find_active(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Option<PromotionBan>, DbErr> {
        Ok(self
            .find(guild_id, user_id)
            .await?
            .filter(|ban| ban.is_active(now)))
    }

    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<PromotionBan>, DbErr> {
        entity::prelude::PromotionBan::find()
            .filter(entity::promotion_ban::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::promotion_ban::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(PromotionBan::from_entity)
            .collect()
    }

    /// Gets every timed ban that has lapsed at `now`, across all guilds.
    pub async fn get_expired(&self, now: DateTime<Utc>) -> Result<Vec<PromotionBan>, DbErr> {
        entity::prelude::PromotionBan::find()
            .filter(entity::promotion_ban::Column::EndTime.is_not_null())
            .filter(entity::promotion_ban::Column::EndTime.lte(now))
            .all(self.db)
            .await?
            .into_iter()
            .map(PromotionBan::from_entity)
            .collect()
    }

    /// Deletes a member's ban.
    ///
    /// # Returns
    /// - `Ok(true)` - A ban row was deleted
    /// - `Ok(false)` - The member had no ban row
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PromotionBan::delete_many()
            .filter(entity::promotion_ban::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_ban::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PromotionBan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
