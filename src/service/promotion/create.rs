//! Granting promotions.

use chrono::Utc;

use crate::{
    data::{
        AdminRoleRepository, GuildSettingsRepository, PromotionBanRepository,
        PromotionGrantRepository,
    },
    error::{internal::InternalError, promotion::PromotionError, AppError},
    model::{
        log::{LogAction, NewLogEntry},
        promotion::{CreatePromotionParam, NewPromotionGrant, PromotionGrant},
    },
    service::{
        discord::{GuildRoster, MemberSnapshot},
        stats::StatsService,
    },
};

use super::{embed, validate_role_hierarchy, HierarchyCheck, PromotionService};

impl<'a> PromotionService<'a> {
    /// Grants a bot-managed role to a member.
    ///
    /// Validates in order: the role is on the guild's admin-role allow-list, the bot can
    /// manage it, the target sits below it, the granter sits above it (unless they own the
    /// guild), the target is not banned and does not already hold it. On success the role
    /// is added on Discord; for permanent grants the target's previous top admin role is
    /// removed when the guild has that enabled. The grant is stored with a snapshot of the
    /// target's activity, logged, and the target is sent a DM.
    ///
    /// If storing the grant fails after the role was added, the error is logged and
    /// returned and the role stays on the member.
    ///
    /// # Arguments
    /// - `param` - Guild, target, role, granter, duration and reason
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - The stored grant
    /// - `Err(AppError::PromotionErr)` - A validation check failed; nothing was changed
    /// - `Err(AppError::DiscordErr)` - Discord request failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_promotion(
        &self,
        param: CreatePromotionParam,
    ) -> Result<PromotionGrant, AppError> {
        let CreatePromotionParam {
            guild_id,
            target_id,
            role_id,
            granter_id,
            duration,
            reason,
        } = param;

        let admin_roles = AdminRoleRepository::new(self.db);
        if !admin_roles.contains(guild_id, role_id).await? {
            return Err(PromotionError::RoleNotAllowed.into());
        }

        let roster = self.discord.guild_roster(guild_id).await?;
        let role = roster
            .role(role_id)
            .ok_or(PromotionError::RoleNotFound)?
            .clone();

        let bot_id = self.discord.current_user_id().await?;
        let bot = self
            .discord
            .member(guild_id, bot_id)
            .await?
            .ok_or(InternalError::GuildUnavailable(guild_id))?;
        let target = self
            .discord
            .member(guild_id, target_id)
            .await?
            .ok_or(PromotionError::MemberNotFound)?;
        let granter = self
            .discord
            .member(guild_id, granter_id)
            .await?
            .ok_or(PromotionError::MemberNotFound)?;

        validate_role_hierarchy(&HierarchyCheck {
            role_position: role.position,
            bot_top_position: roster.top_position(&bot.role_ids),
            bot_can_manage_roles: roster.can_manage_roles(&bot.role_ids),
            target_top_position: roster.top_position_excluding(&target.role_ids, role_id),
            granter_top_position: roster.top_position(&granter.role_ids),
            granter_is_owner: roster.owner_id == granter_id,
        })?;

        let now = Utc::now();
        if PromotionBanRepository::new(self.db)
            .find_active(guild_id, target_id, now)
            .await?
            .is_some()
        {
            return Err(PromotionError::TargetBanned.into());
        }

        if target.has_role(role_id) {
            return Err(PromotionError::AlreadyHasRole.into());
        }

        let grant_repo = PromotionGrantRepository::new(self.db);

        // A record without the role on Discord means the role was removed by hand.
        if let Some(stale) = grant_repo.find(guild_id, target_id, role_id).await? {
            grant_repo.delete(stale.id).await?;
        }

        self.discord
            .add_role(guild_id, target_id, role_id, &reason)
            .await?;

        tracing::info!(
            "Granted role {} to user {} in guild {} ({})",
            role_id,
            target_id,
            guild_id,
            duration
        );

        let settings = GuildSettingsRepository::new(self.db).get(guild_id).await?;
        if duration.is_permanent() && settings.replace_previous_role {
            let allowed = admin_roles.list(guild_id).await?;
            self.replace_previous_role(&roster, &target, role_id, &allowed, granter_id)
                .await;
        }

        let stats = match StatsService::new(self.db).snapshot(guild_id, target_id).await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!("Failed to snapshot stats for user {}: {}", target_id, e);
                None
            }
        };

        let grant = grant_repo
            .create(NewPromotionGrant {
                guild_id,
                user_id: target_id,
                role_id,
                reason: reason.clone(),
                by_user_id: granter_id,
                start_time: now,
                end_time: duration.end_time(now),
                duration,
                user_stats_snapshot: stats,
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    "Role {} was added to user {} in guild {} but the grant could not be saved: {}",
                    role_id,
                    target_id,
                    guild_id,
                    e
                );
                e
            })?;

        self.record(NewLogEntry {
            guild_id,
            action: LogAction::GrantCreated,
            user_id: target_id,
            role_id: Some(role_id),
            by_user_id: Some(granter_id),
            details: format!("Duration: {}. Reason: {}", grant.duration, reason),
        })
        .await;

        self.notify_member(
            guild_id,
            target_id,
            embed::granted_dm_embed(&grant, &role.name, &roster.name),
        )
        .await;

        Ok(grant)
    }

    /// Removes the target's highest allow-listed role other than the one just granted.
    ///
    /// Any grant record for the replaced role is deleted and logged as ended. Discord
    /// failures are logged and leave the previous role in place.
    async fn replace_previous_role(
        &self,
        roster: &GuildRoster,
        target: &MemberSnapshot,
        granted_role_id: u64,
        allowed: &[u64],
        granter_id: u64,
    ) {
        let Some(previous) = target
            .role_ids
            .iter()
            .copied()
            .filter(|id| *id != granted_role_id && allowed.contains(id))
            .max_by_key(|id| roster.role(*id).map(|r| r.position).unwrap_or(0))
        else {
            return;
        };

        let guild_id = roster.guild_id;
        let user_id = target.user_id;

        self.guard.mark(guild_id, user_id, previous).await;
        if let Err(e) = self
            .discord
            .remove_role(guild_id, user_id, previous, "Replaced by a permanent promotion")
            .await
        {
            tracing::warn!(
                "Failed to remove previous role {} from user {} in guild {}: {}",
                previous,
                user_id,
                guild_id,
                e
            );
            return;
        }

        tracing::info!(
            "Removed previous role {} from user {} in guild {}",
            previous,
            user_id,
            guild_id
        );

        let grant_repo = PromotionGrantRepository::new(self.db);
        let replaced = match grant_repo.find(guild_id, user_id, previous).await {
            Ok(replaced) => replaced,
            Err(e) => {
                tracing::error!("Failed to look up replaced grant: {}", e);
                return;
            }
        };

        let Some(replaced) = replaced else {
            return;
        };

        if let Err(e) = grant_repo.delete(replaced.id).await {
            tracing::error!("Failed to delete replaced grant {}: {}", replaced.id, e);
            return;
        }

        self.record(NewLogEntry {
            guild_id,
            action: LogAction::GrantEnded,
            user_id,
            role_id: Some(previous),
            by_user_id: Some(granter_id),
            details: format!("Replaced by a permanent promotion to <@&{}>.", granted_role_id),
        })
        .await;
    }
}
