//! Promotion ban factory.

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ban with the given end time.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Banned user's Discord ID
/// - `end_time` - When the ban lifts (`None` for permanent)
///
/// # Returns
/// - `Ok(Model)` - The created ban
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ban_until(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    end_time: Option<DateTime<Utc>>,
) -> Result<entity::promotion_ban::Model, DbErr> {
    entity::promotion_ban::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        reason: ActiveValue::Set("Test ban".to_string()),
        by_user_id: ActiveValue::Set("1".to_string()),
        start_time: ActiveValue::Set(Utc::now() - TimeDelta::hours(1)),
        end_time: ActiveValue::Set(end_time),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a ban that lasts one more day.
pub async fn create_ban(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::promotion_ban::Model, DbErr> {
    create_ban_until(db, guild_id, user_id, Some(Utc::now() + TimeDelta::days(1))).await
}
