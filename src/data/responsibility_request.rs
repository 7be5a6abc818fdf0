//! Responsibility application and suggestion repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::responsibility::{RequestKind, RequestStatus, ResponsibilityRequest};

pub struct ResponsibilityRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Values for a new pending request.
#[derive(Debug, Clone)]
pub struct NewResponsibilityRequest {
    pub guild_id: u64,
    pub kind: RequestKind,
    pub responsibility_id: Option<i32>,
    pub user_id: u64,
    pub suggested_name: Option<String>,
    pub content: String,
}

impl<'a> ResponsibilityRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending request.
    pub async fn create(
        &self,
        param: NewResponsibilityRequest,
    ) -> Result<ResponsibilityRequest, DbErr> {
        let entity = entity::responsibility_request::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            responsibility_id: ActiveValue::Set(param.responsibility_id),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            suggested_name: ActiveValue::Set(param.suggested_name),
            content: ActiveValue::Set(param.content),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            channel_id: ActiveValue::Set(None),
            message_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            decided_by: ActiveValue::Set(None),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ResponsibilityRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ResponsibilityRequest>, DbErr> {
        entity::prelude::ResponsibilityRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(ResponsibilityRequest::from_entity)
            .transpose()
    }

    /// Finds a member's pending application to a responsibility.
    pub async fn find_pending_application(
        &self,
        responsibility_id: i32,
        user_id: u64,
    ) -> Result<Option<ResponsibilityRequest>, DbErr> {
        entity::prelude::ResponsibilityRequest::find()
            .filter(entity::responsibility_request::Column::Kind.eq(RequestKind::Apply.as_str()))
            .filter(
                entity::responsibility_request::Column::ResponsibilityId.eq(responsibility_id),
            )
            .filter(entity::responsibility_request::Column::UserId.eq(user_id.to_string()))
            .filter(
                entity::responsibility_request::Column::Status
                    .eq(RequestStatus::Pending.as_str()),
            )
            .one(self.db)
            .await?
            .map(ResponsibilityRequest::from_entity)
            .transpose()
    }

    /// Lists a guild's pending requests, oldest first.
    pub async fn get_pending(&self, guild_id: u64) -> Result<Vec<ResponsibilityRequest>, DbErr> {
        entity::prelude::ResponsibilityRequest::find()
            .filter(entity::responsibility_request::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                entity::responsibility_request::Column::Status
                    .eq(RequestStatus::Pending.as_str()),
            )
            .order_by_asc(entity::responsibility_request::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(ResponsibilityRequest::from_entity)
            .collect()
    }

    /// Records where the review embed for a request was posted.
    pub async fn set_message(&self, id: i32, channel_id: u64, message_id: u64) -> Result<(), DbErr> {
        let Some(existing) = entity::prelude::ResponsibilityRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::responsibility_request::ActiveModel = existing.into();
        active.channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        active.message_id = ActiveValue::Set(Some(message_id.to_string()));
        active.update(self.db).await?;

        Ok(())
    }

    /// Marks a request as decided.
    ///
    /// # Returns
    /// - `Ok(Some(ResponsibilityRequest))` - The decided request
    /// - `Ok(None)` - No request with that id exists
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn decide(
        &self,
        id: i32,
        status: RequestStatus,
        decided_by: u64,
    ) -> Result<Option<ResponsibilityRequest>, DbErr> {
        let Some(existing) = entity::prelude::ResponsibilityRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::responsibility_request::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.decided_by = ActiveValue::Set(Some(decided_by.to_string()));
        active.decided_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        ResponsibilityRequest::from_entity(entity).map(Some)
    }
}
