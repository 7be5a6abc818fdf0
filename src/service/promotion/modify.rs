//! Ending grants early and changing their duration.

use chrono::Utc;

use crate::{
    data::PromotionGrantRepository,
    error::{promotion::PromotionError, AppError},
    model::{
        duration::PromotionDuration,
        log::{LogAction, NewLogEntry},
        promotion::{EndPromotionParam, PromotionGrant},
    },
};

use super::{embed, PromotionService};

impl<'a> PromotionService<'a> {
    /// Ends an active grant before its end time.
    ///
    /// Removes the role from the member if they still hold it, deletes the grant, logs the
    /// change and DMs the member.
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - The grant that was ended
    /// - `Err(AppError::PromotionErr(GrantNotFound))` - No grant for that member and role
    /// - `Err(AppError::DiscordErr)` - Removing the role failed; the grant is kept
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn end_promotion(&self, param: EndPromotionParam) -> Result<PromotionGrant, AppError> {
        let grant_repo = PromotionGrantRepository::new(self.db);
        let grant = grant_repo
            .find(param.guild_id, param.user_id, param.role_id)
            .await?
            .ok_or(PromotionError::GrantNotFound)?;

        let member = self.discord.member(param.guild_id, param.user_id).await?;
        if member.is_some_and(|m| m.has_role(param.role_id)) {
            self.guard
                .mark(param.guild_id, param.user_id, param.role_id)
                .await;
            self.discord
                .remove_role(param.guild_id, param.user_id, param.role_id, &param.reason)
                .await?;
        }

        grant_repo.delete(grant.id).await?;

        tracing::info!(
            "Ended grant {} of role {} for user {} in guild {}",
            grant.id,
            grant.role_id,
            grant.user_id,
            grant.guild_id
        );

        self.record(NewLogEntry {
            guild_id: param.guild_id,
            action: LogAction::GrantEnded,
            user_id: param.user_id,
            role_id: Some(param.role_id),
            by_user_id: Some(param.by_user_id),
            details: param.reason,
        })
        .await;

        let (guild_name, role_name) = self.display_names(param.guild_id, param.role_id).await;
        self.notify_member(
            param.guild_id,
            param.user_id,
            embed::removed_dm_embed(&role_name, &guild_name, false),
        )
        .await;

        Ok(grant)
    }

    /// Changes how long a grant lasts.
    ///
    /// The new end time is measured from now, not from the grant's start. Setting a
    /// permanent duration clears the end time.
    ///
    /// # Arguments
    /// - `grant_id` - Grant to change
    /// - `duration` - New duration
    /// - `by_user_id` - Member making the change
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - The updated grant
    /// - `Err(AppError::PromotionErr(GrantNotFound))` - The grant no longer exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn modify_promotion_duration(
        &self,
        grant_id: i32,
        duration: PromotionDuration,
        by_user_id: u64,
    ) -> Result<PromotionGrant, AppError> {
        let grant_repo = PromotionGrantRepository::new(self.db);
        let existing = grant_repo
            .find_by_id(grant_id)
            .await?
            .ok_or(PromotionError::GrantNotFound)?;

        let end_time = duration.end_time(Utc::now());
        let updated = grant_repo
            .update_duration(grant_id, duration, end_time)
            .await?
            .ok_or(PromotionError::GrantNotFound)?;

        tracing::info!(
            "Changed duration of grant {} from {} to {}",
            grant_id,
            existing.duration,
            updated.duration
        );

        self.record(NewLogEntry {
            guild_id: updated.guild_id,
            action: LogAction::GrantModified,
            user_id: updated.user_id,
            role_id: Some(updated.role_id),
            by_user_id: Some(by_user_id),
            details: embed::duration_change_details(&existing.duration, &updated.duration),
        })
        .await;

        let (guild_name, role_name) = self
            .display_names(updated.guild_id, updated.role_id)
            .await;
        self.notify_member(
            updated.guild_id,
            updated.user_id,
            embed::modified_dm_embed(&updated, &role_name, &guild_name),
        )
        .await;

        Ok(updated)
    }
}
