//! Promotion lifecycle service.
//!
//! `PromotionService` grants bot-managed roles, ends and re-times them, bans members from
//! promotions and reconciles grants when members leave and rejoin. Every state change is
//! written to the audit log and mirrored to the guild's log channel; members are told
//! about changes by direct message when the guild has that enabled. Log channel posts and
//! DMs are best-effort and never fail the operation that triggered them.
//!
//! Operations are split across submodules:
//! - `create` - Validating and granting a promotion
//! - `modify` - Ending a grant early and changing its duration
//! - `ban` - Adding, removing and expiring promotion bans
//! - `expire` - Polling for expired grants
//! - `member` - Member leave, rejoin and external role removals
//! - `status` - Read-only views for commands and panels
//! - `hierarchy` - Role position checks
//! - `embed` - Log channel and DM embeds

pub mod ban;
pub mod create;
pub mod embed;
pub mod expire;
pub mod hierarchy;
pub mod member;
pub mod modify;
pub mod status;

use sea_orm::DatabaseConnection;
use serenity::all::{CreateEmbed, CreateMessage};
use std::sync::Arc;

use crate::{
    data::{GuildSettingsRepository, PromotionLogRepository},
    model::log::NewLogEntry,
    service::{discord::DiscordGateway, guard::RoleChangeGuard},
};

pub use hierarchy::{validate_role_hierarchy, HierarchyCheck};

/// Service for the promotion lifecycle.
///
/// Holds the database connection, the Discord gateway used for role changes and messages,
/// and the guard shared with the member-update listener so the bot's own role removals are
/// not reported as external changes.
pub struct PromotionService<'a> {
    db: &'a DatabaseConnection,
    discord: Arc<dyn DiscordGateway>,
    guard: RoleChangeGuard,
}

impl<'a> PromotionService<'a> {
    /// Creates a new PromotionService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for grants, bans, logs and settings
    /// - `discord` - Gateway for role changes, member lookups and messages
    /// - `guard` - Guard shared with the member-update listener
    pub fn new(
        db: &'a DatabaseConnection,
        discord: Arc<dyn DiscordGateway>,
        guard: RoleChangeGuard,
    ) -> Self {
        Self { db, discord, guard }
    }

    /// Appends an audit entry and mirrors it to the guild's log channel.
    ///
    /// Failures are logged and swallowed; the change being recorded has already happened.
    async fn record(&self, entry: NewLogEntry) {
        let guild_id = entry.guild_id;
        let action = entry.action;

        let logged = match PromotionLogRepository::new(self.db).append(entry).await {
            Ok(logged) => logged,
            Err(e) => {
                tracing::error!(
                    "Failed to append {} log entry for guild {}: {}",
                    action.as_str(),
                    guild_id,
                    e
                );
                return;
            }
        };

        let settings = match GuildSettingsRepository::new(self.db).get(guild_id).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to load settings for guild {}: {}", guild_id, e);
                return;
            }
        };

        let Some(channel_id) = settings.log_channel_id else {
            return;
        };

        let message = CreateMessage::new().embed(embed::log_entry_embed(&logged));
        if let Err(e) = self.discord.send_message(channel_id, message).await {
            tracing::warn!(
                "Failed to post {} log entry to channel {}: {}",
                action.as_str(),
                channel_id,
                e
            );
        }
    }

    /// Sends a direct message if the guild has DM notifications enabled.
    ///
    /// Members with closed DMs are common, so failures are only logged.
    async fn notify_member(&self, guild_id: u64, user_id: u64, embed: CreateEmbed) {
        match GuildSettingsRepository::new(self.db).get(guild_id).await {
            Ok(settings) if !settings.dm_notifications => return,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to load settings for guild {}: {}", guild_id, e);
                return;
            }
        }

        let message = CreateMessage::new().embed(embed);
        if let Err(e) = self.discord.send_dm(user_id, message).await {
            tracing::warn!("Failed to DM user {}: {}", user_id, e);
        }
    }

    /// Guild name for direct messages, falling back to the id.
    async fn guild_name(&self, guild_id: u64) -> String {
        match self.discord.guild_roster(guild_id).await {
            Ok(roster) => roster.name,
            Err(e) => {
                tracing::warn!("Failed to fetch guild {} for its name: {}", guild_id, e);
                format!("Guild {}", guild_id)
            }
        }
    }

    /// Guild and role names for direct messages.
    ///
    /// Falls back to the raw ids when the guild cannot be fetched.
    async fn display_names(&self, guild_id: u64, role_id: u64) -> (String, String) {
        match self.discord.guild_roster(guild_id).await {
            Ok(roster) => {
                let role_name = roster
                    .role(role_id)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| format!("Role {}", role_id));
                (roster.name, role_name)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch guild {} for names: {}", guild_id, e);
                (format!("Guild {}", guild_id), format!("Role {}", role_id))
            }
        }
    }
}
