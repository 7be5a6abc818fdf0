//! Promotion grant repository.
//!
//! Holds the active, bot-managed role grants. A grant row exists exactly while the bot
//! considers the role granted; ending or expiring a grant deletes its row.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    duration::PromotionDuration,
    promotion::{NewPromotionGrant, PromotionGrant, GRANT_STATUS_ACTIVE},
};

/// Inserts a grant row on any connection, so a move between tables can share a transaction.
pub(super) async fn insert_grant<C: ConnectionTrait>(
    conn: &C,
    param: NewPromotionGrant,
) -> Result<PromotionGrant, DbErr> {
    let snapshot = param
        .user_stats_snapshot
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| DbErr::Custom(format!("Failed to serialize stats snapshot: {}", e)))?;

    let entity = entity::promotion_grant::ActiveModel {
        guild_id: ActiveValue::Set(param.guild_id.to_string()),
        user_id: ActiveValue::Set(param.user_id.to_string()),
        role_id: ActiveValue::Set(param.role_id.to_string()),
        reason: ActiveValue::Set(param.reason),
        by_user_id: ActiveValue::Set(param.by_user_id.to_string()),
        start_time: ActiveValue::Set(param.start_time),
        end_time: ActiveValue::Set(param.end_time),
        duration: ActiveValue::Set(param.duration.as_stored()),
        status: ActiveValue::Set(GRANT_STATUS_ACTIVE.to_string()),
        user_stats_snapshot: ActiveValue::Set(snapshot),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    PromotionGrant::from_entity(entity)
}

/// Repository for active promotion grants.
pub struct PromotionGrantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PromotionGrantRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active grant.
    ///
    /// # Arguments
    /// - `param` - Grant values; `end_time` must agree with `duration`
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - The created grant
    /// - `Err(DbErr)` - Database error during insert or snapshot serialization
    pub async fn create(&self, param: NewPromotionGrant) -> Result<PromotionGrant, DbErr> {
        insert_grant(self.db, param).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PromotionGrant>, DbErr> {
        entity::prelude::PromotionGrant::find_by_id(id)
            .one(self.db)
            .await?
            .map(PromotionGrant::from_entity)
            .transpose()
    }

    /// Finds the grant of a specific role to a specific member.
    pub async fn find(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<Option<PromotionGrant>, DbErr> {
        entity::prelude::PromotionGrant::find()
            .filter(entity::promotion_grant::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_grant::Column::UserId.eq(user_id.to_string()))
            .filter(entity::promotion_grant::Column::RoleId.eq(role_id.to_string()))
            .one(self.db)
            .await?
            .map(PromotionGrant::from_entity)
            .transpose()
    }

    /// Gets all grants held by a member, oldest first.
    pub async fn get_by_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<PromotionGrant>, DbErr> {
        entity::prelude::PromotionGrant::find()
            .filter(entity::promotion_grant::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_grant::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::promotion_grant::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(PromotionGrant::from_entity)
            .collect()
    }

    /// Gets all grants in a guild, soonest-ending first with permanent grants last.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<PromotionGrant>, DbErr> {
        let mut grants = entity::prelude::PromotionGrant::find()
            .filter(entity::promotion_grant::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::promotion_grant::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(PromotionGrant::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        grants.sort_by_key(|grant| (grant.end_time.is_none(), grant.end_time));

        Ok(grants)
    }

    /// Gets every grant whose end time is at or before `now`, across all guilds.
    pub async fn get_expired(&self, now: DateTime<Utc>) -> Result<Vec<PromotionGrant>, DbErr> {
        entity::prelude::PromotionGrant::find()
            .filter(entity::promotion_grant::Column::EndTime.is_not_null())
            .filter(entity::promotion_grant::Column::EndTime.lte(now))
            .order_by_asc(entity::promotion_grant::Column::EndTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(PromotionGrant::from_entity)
            .collect()
    }

    /// Replaces a grant's duration and end time.
    ///
    /// # Returns
    /// - `Ok(Some(PromotionGrant))` - The updated grant
    /// - `Ok(None)` - No grant with that id exists
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_duration(
        &self,
        id: i32,
        duration: PromotionDuration,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Option<PromotionGrant>, DbErr> {
        let Some(existing) = entity::prelude::PromotionGrant::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::promotion_grant::ActiveModel = existing.into();
        active.duration = ActiveValue::Set(duration.as_stored());
        active.end_time = ActiveValue::Set(end_time);

        let entity = active.update(self.db).await?;

        PromotionGrant::from_entity(entity).map(Some)
    }

    /// Deletes a grant by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was deleted
    /// - `Ok(false)` - No grant with that id existed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PromotionGrant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
