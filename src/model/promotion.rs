//! Domain models for the promotion lifecycle.
//!
//! Grants, bans and left-member snapshots are converted from their entity models here, and
//! the parameter types accepted by `PromotionService` are defined alongside them.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{
    duration::PromotionDuration, log::LogEntry, parse_snowflake, stats::UserStats,
};

/// Stored status of an active grant.
pub const GRANT_STATUS_ACTIVE: &str = "active";

fn parse_duration(value: &str) -> Result<PromotionDuration, DbErr> {
    PromotionDuration::from_stored(value)
        .ok_or_else(|| DbErr::Custom(format!("Failed to parse duration: {}", value)))
}

/// An active, bot-managed role grant.
///
/// `end_time` is `None` exactly when `duration` is permanent.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionGrant {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub reason: String,
    /// Discord ID of the member who granted the role.
    pub by_user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: PromotionDuration,
    /// Member activity at the time of the grant.
    pub user_stats_snapshot: Option<UserStats>,
}

impl PromotionGrant {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse a stored id or duration
    pub fn from_entity(entity: entity::promotion_grant::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            role_id: parse_snowflake(&entity.role_id, "role_id")?,
            reason: entity.reason,
            by_user_id: parse_snowflake(&entity.by_user_id, "by_user_id")?,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration: parse_duration(&entity.duration)?,
            user_stats_snapshot: UserStats::from_stored(entity.user_stats_snapshot.as_deref()),
        })
    }
}

/// A member barred from receiving promotions.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionBan {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub reason: String,
    pub by_user_id: u64,
    pub start_time: DateTime<Utc>,
    /// When the ban lifts; `None` for permanent bans.
    pub end_time: Option<DateTime<Utc>>,
}

impl PromotionBan {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::promotion_ban::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            reason: entity.reason,
            by_user_id: parse_snowflake(&entity.by_user_id, "by_user_id")?,
            start_time: entity.start_time,
            end_time: entity.end_time,
        })
    }

    /// Whether the ban still applies at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.end_time.is_none_or(|end| end > now)
    }
}

/// A grant held by a member when they left the guild.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftMemberGrant {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub reason: String,
    pub by_user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: PromotionDuration,
    pub user_stats_snapshot: Option<UserStats>,
    pub left_at: DateTime<Utc>,
}

impl LeftMemberGrant {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::left_member_grant::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            role_id: parse_snowflake(&entity.role_id, "role_id")?,
            reason: entity.reason,
            by_user_id: parse_snowflake(&entity.by_user_id, "by_user_id")?,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration: parse_duration(&entity.duration)?,
            user_stats_snapshot: UserStats::from_stored(entity.user_stats_snapshot.as_deref()),
            left_at: entity.left_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_time.is_some_and(|end| end <= now)
    }
}

/// Parameters for inserting a grant record.
#[derive(Debug, Clone)]
pub struct NewPromotionGrant {
    pub guild_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub reason: String,
    pub by_user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: PromotionDuration,
    pub user_stats_snapshot: Option<UserStats>,
}

impl From<&LeftMemberGrant> for NewPromotionGrant {
    fn from(left: &LeftMemberGrant) -> Self {
        Self {
            guild_id: left.guild_id,
            user_id: left.user_id,
            role_id: left.role_id,
            reason: left.reason.clone(),
            by_user_id: left.by_user_id,
            start_time: left.start_time,
            end_time: left.end_time,
            duration: left.duration,
            user_stats_snapshot: left.user_stats_snapshot.clone(),
        }
    }
}

/// Parameters for `PromotionService::create_promotion`.
#[derive(Debug, Clone)]
pub struct CreatePromotionParam {
    pub guild_id: u64,
    pub target_id: u64,
    pub role_id: u64,
    pub granter_id: u64,
    pub duration: PromotionDuration,
    pub reason: String,
}

/// Parameters for `PromotionService::end_promotion`.
#[derive(Debug, Clone)]
pub struct EndPromotionParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub role_id: u64,
    pub by_user_id: u64,
    pub reason: String,
}

/// Parameters for `PromotionService::add_promotion_ban`.
#[derive(Debug, Clone)]
pub struct AddBanParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub by_user_id: u64,
    pub duration: PromotionDuration,
    pub reason: String,
}

/// Parameters for inserting a ban record.
#[derive(Debug, Clone)]
pub struct NewPromotionBan {
    pub guild_id: u64,
    pub user_id: u64,
    pub reason: String,
    pub by_user_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Result of reconciling a rejoining member's snapshotted grants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RejoinOutcome {
    /// Grants whose role was re-added and record re-inserted.
    pub restored: Vec<PromotionGrant>,
    /// Snapshotted grants that had expired while the member was away.
    pub dropped: Vec<LeftMemberGrant>,
    /// Running grants that could not be restored and stay in the snapshot.
    pub kept: Vec<LeftMemberGrant>,
}

/// Everything the bot knows about one member's promotions.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionStatus {
    pub user_id: u64,
    pub grants: Vec<PromotionGrant>,
    pub ban: Option<PromotionBan>,
    pub stats: UserStats,
    /// Latest audit entries about the member, newest first.
    pub history: Vec<LogEntry>,
}
