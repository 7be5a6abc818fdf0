//! Promotion grant factory.

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating active promotion grants.
///
/// Grants default to permanent. Use `timed` for a grant that ends relative to now, or
/// `end_time` with `duration` to control both columns directly (e.g. to seed an already
/// expired grant).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::promotion_grant::PromotionGrantFactory;
///
/// let grant = PromotionGrantFactory::new(&db, "1", "2", "3")
///     .timed(chrono::TimeDelta::days(7), "7d")
///     .build()
///     .await?;
/// ```
pub struct PromotionGrantFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    role_id: String,
    reason: String,
    by_user_id: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    duration: String,
    user_stats_snapshot: Option<String>,
}

impl<'a> PromotionGrantFactory<'a> {
    /// Creates a new factory for a permanent grant started now.
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
        role_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            role_id: role_id.into(),
            reason: "Test promotion".to_string(),
            by_user_id: "1".to_string(),
            start_time: Utc::now(),
            end_time: None,
            duration: "permanent".to_string(),
            user_stats_snapshot: None,
        }
    }

    /// Makes the grant end `length` after its start time, stored as `label`.
    pub fn timed(mut self, length: TimeDelta, label: impl Into<String>) -> Self {
        self.end_time = Some(self.start_time + length);
        self.duration = label.into();
        self
    }

    /// Sets the end time without touching the stored duration label.
    pub fn end_time(mut self, end_time: Option<DateTime<Utc>>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn by_user_id(mut self, by_user_id: impl Into<String>) -> Self {
        self.by_user_id = by_user_id.into();
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Inserts the grant.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created grant
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::promotion_grant::Model, DbErr> {
        entity::promotion_grant::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            role_id: ActiveValue::Set(self.role_id),
            reason: ActiveValue::Set(self.reason),
            by_user_id: ActiveValue::Set(self.by_user_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            duration: ActiveValue::Set(self.duration),
            status: ActiveValue::Set("active".to_string()),
            user_stats_snapshot: ActiveValue::Set(self.user_stats_snapshot),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permanent grant with default values.
pub async fn create_grant(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    role_id: &str,
) -> Result<entity::promotion_grant::Model, DbErr> {
    PromotionGrantFactory::new(db, guild_id, user_id, role_id)
        .build()
        .await
}

/// Creates a grant whose end time is already `ago` in the past.
pub async fn create_expired_grant(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    role_id: &str,
    ago: TimeDelta,
) -> Result<entity::promotion_grant::Model, DbErr> {
    PromotionGrantFactory::new(db, guild_id, user_id, role_id)
        .start_time(Utc::now() - TimeDelta::days(1))
        .end_time(Some(Utc::now() - ago))
        .duration("1d")
        .build()
        .await
}

/// Creates a left-member snapshot row for a grant.
///
/// # Arguments
/// - `end_time` - When the snapshotted grant ends (`None` for permanent)
pub async fn create_left_member_grant(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    role_id: &str,
    end_time: Option<DateTime<Utc>>,
) -> Result<entity::left_member_grant::Model, DbErr> {
    let duration = if end_time.is_some() { "7d" } else { "permanent" };

    entity::left_member_grant::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        role_id: ActiveValue::Set(role_id.to_string()),
        reason: ActiveValue::Set("Test promotion".to_string()),
        by_user_id: ActiveValue::Set("1".to_string()),
        start_time: ActiveValue::Set(Utc::now() - TimeDelta::days(1)),
        end_time: ActiveValue::Set(end_time),
        duration: ActiveValue::Set(duration.to_string()),
        user_stats_snapshot: ActiveValue::Set(None),
        left_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
