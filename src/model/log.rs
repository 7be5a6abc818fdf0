//! Promotion audit log entries.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{parse_optional_snowflake, parse_snowflake};

/// Maximum number of audit entries kept across all guilds; the oldest are evicted.
pub const MAX_LOG_ENTRIES: u64 = 1000;

/// Kind of state change recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    GrantCreated,
    GrantEnded,
    GrantExpired,
    GrantModified,
    BanAdded,
    BanRemoved,
    BanExpired,
    GrantsSnapshotted,
    GrantRestored,
    GrantDropped,
    RoleRemovedExternally,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrantCreated => "grant_created",
            Self::GrantEnded => "grant_ended",
            Self::GrantExpired => "grant_expired",
            Self::GrantModified => "grant_modified",
            Self::BanAdded => "ban_added",
            Self::BanRemoved => "ban_removed",
            Self::BanExpired => "ban_expired",
            Self::GrantsSnapshotted => "grants_snapshotted",
            Self::GrantRestored => "grant_restored",
            Self::GrantDropped => "grant_dropped",
            Self::RoleRemovedExternally => "role_removed_externally",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let action = match value {
            "grant_created" => Self::GrantCreated,
            "grant_ended" => Self::GrantEnded,
            "grant_expired" => Self::GrantExpired,
            "grant_modified" => Self::GrantModified,
            "ban_added" => Self::BanAdded,
            "ban_removed" => Self::BanRemoved,
            "ban_expired" => Self::BanExpired,
            "grants_snapshotted" => Self::GrantsSnapshotted,
            "grant_restored" => Self::GrantRestored,
            "grant_dropped" => Self::GrantDropped,
            "role_removed_externally" => Self::RoleRemovedExternally,
            _ => return None,
        };

        Some(action)
    }

    /// Short human title used in log embeds.
    pub fn title(&self) -> &'static str {
        match self {
            Self::GrantCreated => "Promotion granted",
            Self::GrantEnded => "Promotion ended",
            Self::GrantExpired => "Promotion expired",
            Self::GrantModified => "Promotion duration changed",
            Self::BanAdded => "Promotion ban added",
            Self::BanRemoved => "Promotion ban removed",
            Self::BanExpired => "Promotion ban expired",
            Self::GrantsSnapshotted => "Member left with active promotions",
            Self::GrantRestored => "Promotion restored on rejoin",
            Self::GrantDropped => "Expired promotion dropped on rejoin",
            Self::RoleRemovedExternally => "Promoted role removed outside the bot",
        }
    }
}

/// One audit log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i32,
    pub guild_id: u64,
    pub action: LogAction,
    /// Member the action applies to.
    pub user_id: u64,
    pub role_id: Option<u64>,
    /// Who performed the action; `None` for automatic actions.
    pub by_user_id: Option<u64>,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::promotion_log::Model) -> Result<Self, DbErr> {
        let action = LogAction::parse(&entity.action)
            .ok_or_else(|| DbErr::Custom(format!("Unknown log action: {}", entity.action)))?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            action,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            role_id: parse_optional_snowflake(entity.role_id, "role_id")?,
            by_user_id: parse_optional_snowflake(entity.by_user_id, "by_user_id")?,
            details: entity.details,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending an audit entry.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub guild_id: u64,
    pub action: LogAction,
    pub user_id: u64,
    pub role_id: Option<u64>,
    pub by_user_id: Option<u64>,
    pub details: String,
}
