//! Embeds posted by the promotion service.
//!
//! Log channel entries and the direct messages sent to promoted, demoted and banned
//! members. Colors follow the kind of change: green for grants, orange for changes, red
//! for removals and bans.

use chrono::Utc;
use serenity::all::{CreateEmbed, Timestamp};

use crate::{
    model::{
        duration::PromotionDuration,
        log::{LogAction, LogEntry},
        promotion::{PromotionBan, PromotionGrant},
    },
    util::time::discord_until,
};

pub const COLOR_GRANTED: u32 = 0x2ecc71;
pub const COLOR_CHANGED: u32 = 0xe67e22;
pub const COLOR_REMOVED: u32 = 0xe74c3c;
pub const COLOR_NEUTRAL: u32 = 0x95a5a6;

/// Embed color for an audit action.
pub fn action_color(action: LogAction) -> u32 {
    match action {
        LogAction::GrantCreated | LogAction::GrantRestored | LogAction::BanExpired => {
            COLOR_GRANTED
        }
        LogAction::GrantModified | LogAction::GrantsSnapshotted => COLOR_CHANGED,
        LogAction::GrantEnded
        | LogAction::GrantExpired
        | LogAction::BanAdded
        | LogAction::RoleRemovedExternally => COLOR_REMOVED,
        LogAction::BanRemoved | LogAction::GrantDropped => COLOR_NEUTRAL,
    }
}

/// Builds the log channel embed for an audit entry.
pub fn log_entry_embed(entry: &LogEntry) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(entry.action.title())
        .color(action_color(entry.action))
        .field("Member", format!("<@{}>", entry.user_id), true)
        .timestamp(Timestamp::from(entry.created_at));

    if let Some(role_id) = entry.role_id {
        embed = embed.field("Role", format!("<@&{}>", role_id), true);
    }

    embed = embed.field(
        "By",
        entry
            .by_user_id
            .map(|id| format!("<@{}>", id))
            .unwrap_or_else(|| "Automatic".to_string()),
        true,
    );

    if !entry.details.is_empty() {
        embed = embed.description(&entry.details);
    }

    embed
}

/// Direct message sent to a member who was just promoted.
pub fn granted_dm_embed(grant: &PromotionGrant, role_name: &str, guild_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("You have been promoted")
        .color(COLOR_GRANTED)
        .description(format!(
            "You were given the **{}** role in **{}**.",
            role_name, guild_name
        ))
        .field("Duration", grant.duration.to_string(), true)
        .field("Ends", discord_until(grant.end_time), true)
        .field("Reason", non_empty(&grant.reason), false)
        .timestamp(Timestamp::from(Utc::now()))
}

/// Direct message sent when a grant expires or is ended.
pub fn removed_dm_embed(role_name: &str, guild_name: &str, expired: bool) -> CreateEmbed {
    let what = if expired { "has expired" } else { "was ended" };

    CreateEmbed::new()
        .title("Promotion ended")
        .color(COLOR_REMOVED)
        .description(format!(
            "Your **{}** role in **{}** {}.",
            role_name, guild_name, what
        ))
        .timestamp(Timestamp::from(Utc::now()))
}

/// Direct message sent when a grant's duration changes.
pub fn modified_dm_embed(
    grant: &PromotionGrant,
    role_name: &str,
    guild_name: &str,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("Promotion updated")
        .color(COLOR_CHANGED)
        .description(format!(
            "The duration of your **{}** role in **{}** changed to **{}**.",
            role_name, guild_name, grant.duration
        ))
        .field("Ends", discord_until(grant.end_time), true)
        .timestamp(Timestamp::from(Utc::now()))
}

/// Direct message sent to a member banned from promotions.
pub fn banned_dm_embed(ban: &PromotionBan, guild_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Promotion ban")
        .color(COLOR_REMOVED)
        .description(format!(
            "You can no longer be promoted in **{}**.",
            guild_name
        ))
        .field("Until", discord_until(ban.end_time), true)
        .field("Reason", non_empty(&ban.reason), false)
        .timestamp(Timestamp::from(Utc::now()))
}

/// Direct message sent when a promotion ban runs out.
pub fn ban_expired_dm_embed(guild_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Promotion ban lifted")
        .color(COLOR_GRANTED)
        .description(format!(
            "Your promotion ban in **{}** has expired. You can be promoted again.",
            guild_name
        ))
        .timestamp(Timestamp::from(Utc::now()))
}

/// Summary of a grant, used in command and panel replies.
pub fn grant_summary_embed(title: &str, grant: &PromotionGrant) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .color(COLOR_GRANTED)
        .description(format!("<@{}> holds <@&{}>.", grant.user_id, grant.role_id))
        .field("Duration", grant.duration.to_string(), true)
        .field("Ends", discord_until(grant.end_time), true)
        .field("Reason", non_empty(&grant.reason), false)
}

/// Describes a duration change for the audit log.
pub fn duration_change_details(from: &PromotionDuration, to: &PromotionDuration) -> String {
    format!("Duration changed from {} to {}.", from, to)
}

fn non_empty(text: &str) -> String {
    if text.trim().is_empty() {
        "No reason given".to_string()
    } else {
        text.to_string()
    }
}
