//! Admin application cooldown repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::application::ApplicationCooldown;

pub struct ApplicationCooldownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationCooldownRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a cooldown for a candidate, replacing any previous one.
    pub async fn upsert(
        &self,
        guild_id: u64,
        candidate_id: u64,
        rejected_by: u64,
        reason: &str,
        until: DateTime<Utc>,
    ) -> Result<ApplicationCooldown, DbErr> {
        entity::prelude::ApplicationCooldown::delete_many()
            .filter(entity::application_cooldown::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                entity::application_cooldown::Column::CandidateId.eq(candidate_id.to_string()),
            )
            .exec(self.db)
            .await?;

        let entity = entity::application_cooldown::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            candidate_id: ActiveValue::Set(candidate_id.to_string()),
            rejected_by: ActiveValue::Set(rejected_by.to_string()),
            reason: ActiveValue::Set(reason.to_string()),
            until: ActiveValue::Set(until),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ApplicationCooldown::from_entity(entity)
    }

    /// Finds a candidate's cooldown if it has not yet ended at `now`.
    pub async fn find_active(
        &self,
        guild_id: u64,
        candidate_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Option<ApplicationCooldown>, DbErr> {
        entity::prelude::ApplicationCooldown::find()
            .filter(entity::application_cooldown::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                entity::application_cooldown::Column::CandidateId.eq(candidate_id.to_string()),
            )
            .filter(entity::application_cooldown::Column::Until.gt(now))
            .one(self.db)
            .await?
            .map(ApplicationCooldown::from_entity)
            .transpose()
    }

    /// Deletes every cooldown that has ended at `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cooldowns deleted
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ApplicationCooldown::delete_many()
            .filter(entity::application_cooldown::Column::Until.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
