//! Promotion bans.

use chrono::{DateTime, Utc};

use crate::{
    data::PromotionBanRepository,
    error::{promotion::PromotionError, AppError},
    model::{
        log::{LogAction, NewLogEntry},
        promotion::{AddBanParam, NewPromotionBan, PromotionBan},
    },
};

use super::{embed, PromotionService};

impl<'a> PromotionService<'a> {
    /// Bans a member from receiving promotions.
    ///
    /// A member has at most one ban per guild. A ban whose end time has passed but that the
    /// poller has not removed yet is replaced.
    ///
    /// Existing grants are left in place; the ban only blocks new ones.
    ///
    /// # Returns
    /// - `Ok(PromotionBan)` - The stored ban
    /// - `Err(AppError::PromotionErr(AlreadyBanned))` - An unexpired ban exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_promotion_ban(&self, param: AddBanParam) -> Result<PromotionBan, AppError> {
        let ban_repo = PromotionBanRepository::new(self.db);
        let now = Utc::now();

        if ban_repo
            .find_active(param.guild_id, param.user_id, now)
            .await?
            .is_some()
        {
            return Err(PromotionError::AlreadyBanned.into());
        }

        let ban = ban_repo
            .create(NewPromotionBan {
                guild_id: param.guild_id,
                user_id: param.user_id,
                reason: param.reason.clone(),
                by_user_id: param.by_user_id,
                start_time: now,
                end_time: param.duration.end_time(now),
            })
            .await?;

        tracing::info!(
            "Banned user {} from promotions in guild {} ({})",
            param.user_id,
            param.guild_id,
            param.duration
        );

        self.record(NewLogEntry {
            guild_id: param.guild_id,
            action: LogAction::BanAdded,
            user_id: param.user_id,
            role_id: None,
            by_user_id: Some(param.by_user_id),
            details: format!("Duration: {}. Reason: {}", param.duration, param.reason),
        })
        .await;

        let guild_name = self.guild_name(param.guild_id).await;
        self.notify_member(
            param.guild_id,
            param.user_id,
            embed::banned_dm_embed(&ban, &guild_name),
        )
        .await;

        Ok(ban)
    }

    /// Lifts a member's promotion ban.
    ///
    /// # Returns
    /// - `Ok(())` - The ban record was deleted
    /// - `Err(AppError::PromotionErr(NotBanned))` - The member has no ban record
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_promotion_ban(
        &self,
        guild_id: u64,
        user_id: u64,
        by_user_id: u64,
    ) -> Result<(), AppError> {
        let ban_repo = PromotionBanRepository::new(self.db);

        if !ban_repo.delete(guild_id, user_id).await? {
            return Err(PromotionError::NotBanned.into());
        }

        tracing::info!(
            "Removed promotion ban of user {} in guild {}",
            user_id,
            guild_id
        );

        self.record(NewLogEntry {
            guild_id,
            action: LogAction::BanRemoved,
            user_id,
            role_id: None,
            by_user_id: Some(by_user_id),
            details: String::new(),
        })
        .await;

        Ok(())
    }

    /// Deletes every ban whose end time has passed and lets the member know.
    ///
    /// Safe to run repeatedly; a ban deleted by an earlier run or a manual unban is not
    /// counted again.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bans that expired in this run
    /// - `Err(AppError::DbErr)` - Failed to query expired bans
    pub async fn expire_bans(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let ban_repo = PromotionBanRepository::new(self.db);
        let expired = ban_repo.get_expired(now).await?;

        let mut count = 0;
        for ban in expired {
            match ban_repo.delete_by_id(ban.id).await {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::error!("Failed to delete expired ban {}: {}", ban.id, e);
                    continue;
                }
            }

            count += 1;
            tracing::info!(
                "Promotion ban of user {} in guild {} expired",
                ban.user_id,
                ban.guild_id
            );

            self.record(NewLogEntry {
                guild_id: ban.guild_id,
                action: LogAction::BanExpired,
                user_id: ban.user_id,
                role_id: None,
                by_user_id: None,
                details: String::new(),
            })
            .await;

            let guild_name = self.guild_name(ban.guild_id).await;
            self.notify_member(
                ban.guild_id,
                ban.user_id,
                embed::ban_expired_dm_embed(&guild_name),
            )
            .await;
        }

        Ok(count)
    }
}
