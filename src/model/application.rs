//! Admin application domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{parse_optional_snowflake, parse_snowflake, stats::UserStats};

/// Length of generated application ids.
pub const APPLICATION_ID_LENGTH: usize = 12;

/// Reason recorded on grants created by approving an application.
pub const APPROVAL_REASON: &str = "Admin application approved";

/// A pending nomination of a member for an admin role.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminApplication {
    /// Generated alphanumeric id used in interaction ids.
    pub id: String,
    pub guild_id: u64,
    pub candidate_id: u64,
    pub requester_id: u64,
    pub created_at: DateTime<Utc>,
    /// Candidate activity when the application was submitted.
    pub user_stats_snapshot: Option<UserStats>,
    /// Where the approval embed was posted.
    pub channel_id: Option<u64>,
    pub message_id: Option<u64>,
}

impl AdminApplication {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::admin_application::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            candidate_id: parse_snowflake(&entity.candidate_id, "candidate_id")?,
            requester_id: parse_snowflake(&entity.requester_id, "requester_id")?,
            created_at: entity.created_at,
            user_stats_snapshot: UserStats::from_stored(entity.user_stats_snapshot.as_deref()),
            channel_id: parse_optional_snowflake(entity.channel_id, "channel_id")?,
            message_id: parse_optional_snowflake(entity.message_id, "message_id")?,
        })
    }
}

/// A rejected candidate's waiting period before they can be nominated again.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCooldown {
    pub id: i32,
    pub guild_id: u64,
    pub candidate_id: u64,
    pub rejected_by: u64,
    pub reason: String,
    pub until: DateTime<Utc>,
}

impl ApplicationCooldown {
    pub fn from_entity(entity: entity::application_cooldown::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            candidate_id: parse_snowflake(&entity.candidate_id, "candidate_id")?,
            rejected_by: parse_snowflake(&entity.rejected_by, "rejected_by")?,
            reason: entity.reason,
            until: entity.until,
        })
    }
}
