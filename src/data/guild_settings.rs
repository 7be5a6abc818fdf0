//! Guild settings repository.
//!
//! Guilds without a row use `GuildSettings::defaults`; the row is created on the first
//! change.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::settings::{GuildSettings, SettingsChannel, SettingsUpdate};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's settings, falling back to defaults when none are stored.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored or default settings
    /// - `Err(DbErr)` - Database error during query or id parsing
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, DbErr> {
        let entity = entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => GuildSettings::from_entity(entity),
            None => Ok(GuildSettings::defaults(guild_id)),
        }
    }

    /// Applies one settings change, creating the row if needed.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the change
    /// - `Err(DbErr)` - Database error during query, insert or update
    pub async fn update(
        &self,
        guild_id: u64,
        update: SettingsUpdate,
    ) -> Result<GuildSettings, DbErr> {
        let existing = entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        let mut active: entity::guild_settings::ActiveModel = match existing {
            Some(model) => model.into(),
            None => {
                let defaults = GuildSettings::defaults(guild_id);
                entity::guild_settings::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    log_channel_id: ActiveValue::Set(None),
                    applications_channel_id: ActiveValue::Set(None),
                    responsibilities_channel_id: ActiveValue::Set(None),
                    suggestions_channel_id: ActiveValue::Set(None),
                    application_cooldown_hours: ActiveValue::Set(
                        defaults.application_cooldown_hours,
                    ),
                    replace_previous_role: ActiveValue::Set(defaults.replace_previous_role),
                    dm_notifications: ActiveValue::Set(defaults.dm_notifications),
                    updated_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?
                .into()
            }
        };

        match update {
            SettingsUpdate::Channel(channel, channel_id) => {
                let value = ActiveValue::Set(channel_id.map(|id| id.to_string()));
                match channel {
                    SettingsChannel::Log => active.log_channel_id = value,
                    SettingsChannel::Applications => active.applications_channel_id = value,
                    SettingsChannel::Responsibilities => {
                        active.responsibilities_channel_id = value
                    }
                    SettingsChannel::Suggestions => active.suggestions_channel_id = value,
                }
            }
            SettingsUpdate::ApplicationCooldownHours(hours) => {
                active.application_cooldown_hours = ActiveValue::Set(hours)
            }
            SettingsUpdate::ReplacePreviousRole(replace) => {
                active.replace_previous_role = ActiveValue::Set(replace)
            }
            SettingsUpdate::DmNotifications(enabled) => {
                active.dm_notifications = ActiveValue::Set(enabled)
            }
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        GuildSettings::from_entity(entity)
    }
}
