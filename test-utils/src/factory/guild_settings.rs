//! Guild settings and admin-role allow-list factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating per-guild settings rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db, "123")
///     .replace_previous_role(false)
///     .log_channel_id(Some("456".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    log_channel_id: Option<String>,
    applications_channel_id: Option<String>,
    application_cooldown_hours: i32,
    replace_previous_role: bool,
    dm_notifications: bool,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new factory matching the migration defaults.
    ///
    /// Defaults:
    /// - no channels configured
    /// - application_cooldown_hours: `72`
    /// - replace_previous_role: `true`
    /// - dm_notifications: `true`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            log_channel_id: None,
            applications_channel_id: None,
            application_cooldown_hours: 72,
            replace_previous_role: true,
            dm_notifications: true,
        }
    }

    pub fn log_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.log_channel_id = channel_id;
        self
    }

    pub fn applications_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.applications_channel_id = channel_id;
        self
    }

    pub fn application_cooldown_hours(mut self, hours: i32) -> Self {
        self.application_cooldown_hours = hours;
        self
    }

    pub fn replace_previous_role(mut self, replace: bool) -> Self {
        self.replace_previous_role = replace;
        self
    }

    pub fn dm_notifications(mut self, enabled: bool) -> Self {
        self.dm_notifications = enabled;
        self
    }

    /// Inserts the settings row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            applications_channel_id: ActiveValue::Set(self.applications_channel_id),
            responsibilities_channel_id: ActiveValue::Set(None),
            suggestions_channel_id: ActiveValue::Set(None),
            application_cooldown_hours: ActiveValue::Set(self.application_cooldown_hours),
            replace_previous_role: ActiveValue::Set(self.replace_previous_role),
            dm_notifications: ActiveValue::Set(self.dm_notifications),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default values.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db, guild_id).build().await
}

/// Adds a role to the guild's promotable admin-role allow-list.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `role_id` - Discord role ID to allow
///
/// # Returns
/// - `Ok(Model)` - The created allow-list entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin_role(
    db: &DatabaseConnection,
    guild_id: &str,
    role_id: &str,
) -> Result<entity::promotion_admin_role::Model, DbErr> {
    entity::promotion_admin_role::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        role_id: ActiveValue::Set(role_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
