//! Reconciling grants with members leaving, rejoining and losing roles elsewhere.

use chrono::Utc;

use crate::{
    data::{AdminRoleRepository, LeftMemberRepository, PromotionGrantRepository},
    error::AppError,
    model::{
        log::{LogAction, NewLogEntry},
        promotion::RejoinOutcome,
    },
};

use super::PromotionService;

const RESTORE_REASON: &str = "Promotion restored on rejoin";

impl<'a> PromotionService<'a> {
    /// Moves a departing member's grants into a left-member snapshot.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of grants snapshotted (0 if the member had none)
    /// - `Err(AppError::DbErr)` - Database error; nothing was moved
    pub async fn handle_member_leave(&self, guild_id: u64, user_id: u64) -> Result<usize, AppError> {
        let moved = LeftMemberRepository::new(self.db)
            .snapshot_grants(guild_id, user_id, Utc::now())
            .await?;

        if moved.is_empty() {
            return Ok(0);
        }

        tracing::info!(
            "User {} left guild {} with {} active grant(s)",
            user_id,
            guild_id,
            moved.len()
        );

        let roles = moved
            .iter()
            .map(|g| format!("<@&{}>", g.role_id))
            .collect::<Vec<_>>()
            .join(", ");

        self.record(NewLogEntry {
            guild_id,
            action: LogAction::GrantsSnapshotted,
            user_id,
            role_id: None,
            by_user_id: None,
            details: format!("Saved until rejoin: {}", roles),
        })
        .await;

        Ok(moved.len())
    }

    /// Restores a rejoining member's snapshotted grants.
    ///
    /// Grants still running are re-added on Discord and stored again with their original
    /// start and end times. Grants that ended while the member was away are dropped and
    /// logged. A grant whose role cannot be re-added, or whose record cannot be stored,
    /// stays in the snapshot so the next rejoin tries again.
    ///
    /// # Returns
    /// - `Ok(RejoinOutcome)` - Restored, dropped and kept grants (all empty if nothing was saved)
    /// - `Err(AppError::DbErr)` - Failed to read the snapshot
    pub async fn handle_member_rejoin(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<RejoinOutcome, AppError> {
        let left_repo = LeftMemberRepository::new(self.db);
        let snapshot = left_repo.get(guild_id, user_id).await?;

        let mut outcome = RejoinOutcome::default();
        if snapshot.is_empty() {
            return Ok(outcome);
        }

        let now = Utc::now();

        for left in snapshot {
            if left.is_expired(now) {
                if let Err(e) = left_repo.discard(left.id).await {
                    tracing::error!(
                        "Failed to discard expired snapshot of role {} for user {} in guild {}: {}",
                        left.role_id,
                        user_id,
                        guild_id,
                        e
                    );
                    outcome.kept.push(left);
                    continue;
                }

                self.record(NewLogEntry {
                    guild_id,
                    action: LogAction::GrantDropped,
                    user_id,
                    role_id: Some(left.role_id),
                    by_user_id: None,
                    details: format!("Duration: {}", left.duration),
                })
                .await;
                outcome.dropped.push(left);
                continue;
            }

            if let Err(e) = self
                .discord
                .add_role(guild_id, user_id, left.role_id, RESTORE_REASON)
                .await
            {
                tracing::warn!(
                    "Failed to restore role {} to user {} in guild {}, keeping it saved: {}",
                    left.role_id,
                    user_id,
                    guild_id,
                    e
                );
                outcome.kept.push(left);
                continue;
            }

            match left_repo.restore(&left).await {
                Ok(grant) => {
                    self.record(NewLogEntry {
                        guild_id,
                        action: LogAction::GrantRestored,
                        user_id,
                        role_id: Some(grant.role_id),
                        by_user_id: None,
                        details: format!("Duration: {}", grant.duration),
                    })
                    .await;
                    outcome.restored.push(grant);
                }
                Err(e) => {
                    tracing::error!(
                        "Role {} was restored to user {} in guild {} but the grant could not be saved: {}",
                        left.role_id,
                        user_id,
                        guild_id,
                        e
                    );
                    outcome.kept.push(left);
                }
            }
        }

        tracing::info!(
            "User {} rejoined guild {}: {} grant(s) restored, {} dropped, {} kept for later",
            user_id,
            guild_id,
            outcome.restored.len(),
            outcome.dropped.len(),
            outcome.kept.len()
        );

        Ok(outcome)
    }

    /// Logs promoted roles removed from a member by someone other than the bot.
    ///
    /// Removals the bot marked in its guard are consumed and ignored, as are roles not on
    /// the admin-role allow-list or without an active grant. Grant records are left as they
    /// are.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of external removals logged
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record_external_removals(
        &self,
        guild_id: u64,
        user_id: u64,
        removed_role_ids: &[u64],
    ) -> Result<usize, AppError> {
        let admin_roles = AdminRoleRepository::new(self.db);
        let grant_repo = PromotionGrantRepository::new(self.db);

        let mut count = 0;
        for role_id in removed_role_ids.iter().copied() {
            if self.guard.consume(guild_id, user_id, role_id).await {
                continue;
            }

            if !admin_roles.contains(guild_id, role_id).await? {
                continue;
            }

            let Some(grant) = grant_repo.find(guild_id, user_id, role_id).await? else {
                continue;
            };

            tracing::info!(
                "Role {} was removed from user {} in guild {} outside the bot",
                role_id,
                user_id,
                guild_id
            );

            self.record(NewLogEntry {
                guild_id,
                action: LogAction::RoleRemovedExternally,
                user_id,
                role_id: Some(role_id),
                by_user_id: None,
                details: format!("Grant {} ({}) is still on record.", grant.id, grant.duration),
            })
            .await;
            count += 1;
        }

        Ok(count)
    }
}
