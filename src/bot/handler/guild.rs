use serenity::all::{Context, Guild};

use crate::state::AppState;

/// Handles the guild_create event when a guild becomes available or the bot joins one.
///
/// Warns when the bot cannot manage roles there, since every promotion would fail.
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, new: {}",
        guild.name,
        guild_id,
        guild.member_count,
        is_new.unwrap_or(false)
    );

    let gateway = AppState::gateway(&ctx.http);

    let bot_id = match gateway.current_user_id().await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to fetch the bot user: {}", e);
            return;
        }
    };

    let Some(bot) = (match gateway.member(guild_id, bot_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::error!("Failed to fetch the bot member in guild {}: {}", guild_id, e);
            return;
        }
    }) else {
        tracing::warn!("Bot is not a member of guild {} it was told about", guild_id);
        return;
    };

    let roster = match gateway.guild_roster(guild_id).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to fetch roles of guild {}: {}", guild_id, e);
            return;
        }
    };

    if !roster.can_manage_roles(&bot.role_ids) {
        tracing::warn!(
            "Missing Manage Roles in guild {} ({}); promotions will fail there",
            guild.name,
            guild_id
        );
    }
}
