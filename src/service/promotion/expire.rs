//! Expiring timed grants.

use chrono::{DateTime, Utc};

use crate::{
    data::PromotionGrantRepository,
    error::AppError,
    model::{
        log::{LogAction, NewLogEntry},
        promotion::PromotionGrant,
    },
};

use super::{embed, PromotionService};

const EXPIRY_REASON: &str = "Timed promotion expired";

impl<'a> PromotionService<'a> {
    /// Removes every grant whose end time has passed.
    ///
    /// For each expired grant the role is removed from the member if they still hold it,
    /// then the record is deleted, logged and the member notified. If removing the role
    /// fails the record is kept so the next run retries it. A grant already deleted by an
    /// earlier run or a manual end is skipped, so running twice over the same grants
    /// changes nothing the second time.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of grants that expired in this run
    /// - `Err(AppError::DbErr)` - Failed to query expired grants
    pub async fn expire_grants(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let grant_repo = PromotionGrantRepository::new(self.db);
        let expired = grant_repo.get_expired(now).await?;

        let mut count = 0;
        for grant in expired {
            if !self.remove_expired_role(&grant).await {
                continue;
            }

            match grant_repo.delete(grant.id).await {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::error!("Failed to delete expired grant {}: {}", grant.id, e);
                    continue;
                }
            }

            count += 1;
            tracing::info!(
                "Grant {} of role {} for user {} in guild {} expired",
                grant.id,
                grant.role_id,
                grant.user_id,
                grant.guild_id
            );

            self.record(NewLogEntry {
                guild_id: grant.guild_id,
                action: LogAction::GrantExpired,
                user_id: grant.user_id,
                role_id: Some(grant.role_id),
                by_user_id: None,
                details: format!("Duration: {}", grant.duration),
            })
            .await;

            let (guild_name, role_name) = self.display_names(grant.guild_id, grant.role_id).await;
            self.notify_member(
                grant.guild_id,
                grant.user_id,
                embed::removed_dm_embed(&role_name, &guild_name, true),
            )
            .await;
        }

        Ok(count)
    }

    /// Takes the role away from a member whose grant expired.
    ///
    /// # Returns
    /// - `true` - The role is gone (removed now, or the member no longer had it)
    /// - `false` - Discord failed; the grant should be kept for the next run
    async fn remove_expired_role(&self, grant: &PromotionGrant) -> bool {
        let member = match self.discord.member(grant.guild_id, grant.user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch user {} in guild {} for expired grant {}: {}",
                    grant.user_id,
                    grant.guild_id,
                    grant.id,
                    e
                );
                return false;
            }
        };

        if !member.is_some_and(|m| m.has_role(grant.role_id)) {
            return true;
        }

        self.guard
            .mark(grant.guild_id, grant.user_id, grant.role_id)
            .await;

        match self
            .discord
            .remove_role(grant.guild_id, grant.user_id, grant.role_id, EXPIRY_REASON)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to remove role {} from user {} for expired grant {}: {}",
                    grant.role_id,
                    grant.user_id,
                    grant.id,
                    e
                );
                false
            }
        }
    }
}
