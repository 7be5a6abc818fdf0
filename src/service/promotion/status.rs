//! Read-only views of promotion state.

use chrono::Utc;

use crate::{
    data::{PromotionBanRepository, PromotionGrantRepository, PromotionLogRepository},
    error::AppError,
    model::{
        log::LogEntry,
        promotion::{PromotionBan, PromotionGrant, PromotionStatus},
    },
    service::stats::StatsService,
};

use super::PromotionService;

/// Audit entries shown in a member's status.
const STATUS_HISTORY_LIMIT: u64 = 5;

impl<'a> PromotionService<'a> {
    /// Collects a member's active grants, current ban, activity stats and recent history.
    pub async fn user_status(&self, guild_id: u64, user_id: u64) -> Result<PromotionStatus, AppError> {
        let grants = PromotionGrantRepository::new(self.db)
            .get_by_user(guild_id, user_id)
            .await?;
        let ban = PromotionBanRepository::new(self.db)
            .find_active(guild_id, user_id, Utc::now())
            .await?;
        let stats = StatsService::new(self.db).snapshot(guild_id, user_id).await?;
        let history = PromotionLogRepository::new(self.db)
            .get_recent_for_user(guild_id, user_id, STATUS_HISTORY_LIMIT)
            .await?;

        Ok(PromotionStatus {
            user_id,
            grants,
            ban,
            stats,
            history,
        })
    }

    /// Active grants in a guild, soonest-ending first.
    pub async fn list_grants(&self, guild_id: u64) -> Result<Vec<PromotionGrant>, AppError> {
        Ok(PromotionGrantRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?)
    }

    /// Promotion bans in a guild.
    pub async fn list_bans(&self, guild_id: u64) -> Result<Vec<PromotionBan>, AppError> {
        Ok(PromotionBanRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?)
    }

    /// The newest audit entries of a guild.
    pub async fn recent_logs(&self, guild_id: u64, limit: u64) -> Result<Vec<LogEntry>, AppError> {
        Ok(PromotionLogRepository::new(self.db)
            .get_recent(guild_id, limit)
            .await?)
    }

    /// Finds a member's grant of a specific role.
    pub async fn find_grant(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<Option<PromotionGrant>, AppError> {
        Ok(PromotionGrantRepository::new(self.db)
            .find(guild_id, user_id, role_id)
            .await?)
    }

    pub async fn find_grant_by_id(&self, grant_id: i32) -> Result<Option<PromotionGrant>, AppError> {
        Ok(PromotionGrantRepository::new(self.db)
            .find_by_id(grant_id)
            .await?)
    }
}
