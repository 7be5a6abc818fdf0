//! Admin application repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::{application::AdminApplication, stats::UserStats};

pub struct AdminApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending application under a pre-generated id.
    ///
    /// # Returns
    /// - `Ok(AdminApplication)` - The created application
    /// - `Err(DbErr)` - Database error during insert (including an id collision)
    pub async fn create(
        &self,
        id: &str,
        guild_id: u64,
        candidate_id: u64,
        requester_id: u64,
        stats: &UserStats,
    ) -> Result<AdminApplication, DbErr> {
        let snapshot = serde_json::to_string(stats)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize stats snapshot: {}", e)))?;

        let entity = entity::admin_application::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            candidate_id: ActiveValue::Set(candidate_id.to_string()),
            requester_id: ActiveValue::Set(requester_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            user_stats_snapshot: ActiveValue::Set(Some(snapshot)),
            channel_id: ActiveValue::Set(None),
            message_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        AdminApplication::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<AdminApplication>, DbErr> {
        entity::prelude::AdminApplication::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(AdminApplication::from_entity)
            .transpose()
    }

    /// Finds the pending application for a candidate, if any.
    pub async fn find_by_candidate(
        &self,
        guild_id: u64,
        candidate_id: u64,
    ) -> Result<Option<AdminApplication>, DbErr> {
        entity::prelude::AdminApplication::find()
            .filter(entity::admin_application::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::admin_application::Column::CandidateId.eq(candidate_id.to_string()))
            .one(self.db)
            .await?
            .map(AdminApplication::from_entity)
            .transpose()
    }

    /// Records where the approval embed was posted.
    pub async fn set_message(&self, id: &str, channel_id: u64, message_id: u64) -> Result<(), DbErr> {
        let Some(existing) = entity::prelude::AdminApplication::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::admin_application::ActiveModel = existing.into();
        active.channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        active.message_id = ActiveValue::Set(Some(message_id.to_string()));
        active.update(self.db).await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminApplication::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
