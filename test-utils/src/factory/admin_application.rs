//! Admin application and cooldown factories.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a pending admin application with a generated id.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `candidate_id` - Discord ID of the nominated user
/// - `requester_id` - Discord ID of the user who nominated them
///
/// # Returns
/// - `Ok(Model)` - The created application
/// - `Err(DbErr)` - Database error during insert
pub async fn create_application(
    db: &DatabaseConnection,
    guild_id: &str,
    candidate_id: &str,
    requester_id: &str,
) -> Result<entity::admin_application::Model, DbErr> {
    entity::admin_application::ActiveModel {
        id: ActiveValue::Set(format!("app{:09}", next_id())),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        candidate_id: ActiveValue::Set(candidate_id.to_string()),
        requester_id: ActiveValue::Set(requester_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        user_stats_snapshot: ActiveValue::Set(None),
        channel_id: ActiveValue::Set(None),
        message_id: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a rejection cooldown for a candidate lasting until `until`.
pub async fn create_cooldown(
    db: &DatabaseConnection,
    guild_id: &str,
    candidate_id: &str,
    until: DateTime<Utc>,
) -> Result<entity::application_cooldown::Model, DbErr> {
    entity::application_cooldown::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        candidate_id: ActiveValue::Set(candidate_id.to_string()),
        rejected_by: ActiveValue::Set("1".to_string()),
        reason: ActiveValue::Set("Not yet".to_string()),
        until: ActiveValue::Set(until),
        ..Default::default()
    }
    .insert(db)
    .await
}
