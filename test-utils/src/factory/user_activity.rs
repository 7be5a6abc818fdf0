//! Activity stats factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a totals row for a user.
pub async fn create_activity(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    messages: i64,
    voice_minutes: i64,
    reactions: i64,
) -> Result<entity::user_activity::Model, DbErr> {
    entity::user_activity::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        messages: ActiveValue::Set(messages),
        voice_minutes: ActiveValue::Set(voice_minutes),
        reactions: ActiveValue::Set(reactions),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a daily row for a user on `day` (`YYYY-MM-DD`).
pub async fn create_daily_activity(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    day: &str,
    messages: i64,
) -> Result<entity::user_activity_daily::Model, DbErr> {
    entity::user_activity_daily::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        day: ActiveValue::Set(day.to_string()),
        messages: ActiveValue::Set(messages),
        voice_minutes: ActiveValue::Set(0),
        reactions: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
