//! Per-guild configuration.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::parse_optional_snowflake;

pub const DEFAULT_APPLICATION_COOLDOWN_HOURS: i32 = 72;

/// Runtime configuration of one guild, edited through `promote` subcommands.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: u64,
    /// Channel receiving audit log embeds.
    pub log_channel_id: Option<u64>,
    /// Channel receiving admin application embeds.
    pub applications_channel_id: Option<u64>,
    /// Channel receiving responsibility applications.
    pub responsibilities_channel_id: Option<u64>,
    /// Channel receiving responsibility suggestions.
    pub suggestions_channel_id: Option<u64>,
    pub application_cooldown_hours: i32,
    /// Whether a permanent grant removes the member's previous top admin role.
    pub replace_previous_role: bool,
    pub dm_notifications: bool,
    pub updated_at: DateTime<Utc>,
}

impl GuildSettings {
    /// Settings used for guilds that never changed anything.
    pub fn defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            log_channel_id: None,
            applications_channel_id: None,
            responsibilities_channel_id: None,
            suggestions_channel_id: None,
            application_cooldown_hours: DEFAULT_APPLICATION_COOLDOWN_HOURS,
            replace_previous_role: true,
            dm_notifications: true,
            updated_at: Utc::now(),
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse a stored id as u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: crate::model::parse_snowflake(&entity.guild_id, "guild_id")?,
            log_channel_id: parse_optional_snowflake(entity.log_channel_id, "log_channel_id")?,
            applications_channel_id: parse_optional_snowflake(
                entity.applications_channel_id,
                "applications_channel_id",
            )?,
            responsibilities_channel_id: parse_optional_snowflake(
                entity.responsibilities_channel_id,
                "responsibilities_channel_id",
            )?,
            suggestions_channel_id: parse_optional_snowflake(
                entity.suggestions_channel_id,
                "suggestions_channel_id",
            )?,
            application_cooldown_hours: entity.application_cooldown_hours,
            replace_previous_role: entity.replace_previous_role,
            dm_notifications: entity.dm_notifications,
            updated_at: entity.updated_at,
        })
    }
}

/// Channels a guild can route bot output to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChannel {
    Log,
    Applications,
    Responsibilities,
    Suggestions,
}

impl SettingsChannel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "log" | "logs" => Some(Self::Log),
            "applications" | "application" | "apps" => Some(Self::Applications),
            "responsibilities" | "resp" => Some(Self::Responsibilities),
            "suggestions" | "suggest" => Some(Self::Suggestions),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Applications => "applications",
            Self::Responsibilities => "responsibilities",
            Self::Suggestions => "suggestions",
        }
    }
}

/// A single settings change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Channel(SettingsChannel, Option<u64>),
    ApplicationCooldownHours(i32),
    ReplacePreviousRole(bool),
    DmNotifications(bool),
}
