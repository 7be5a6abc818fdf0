use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::state::AppState;

/// Handles the guild_member_addition event when a member joins a guild
///
/// Restores promotions the member held when they left, as long as they have not expired.
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let guild_id = new_member.guild_id.get();
    let user_id = new_member.user.id.get();

    match state
        .promotions(&ctx.http)
        .handle_member_rejoin(guild_id, user_id)
        .await
    {
        Ok(outcome) if outcome.restored.is_empty() && outcome.dropped.is_empty() => {}
        Ok(outcome) => {
            tracing::info!(
                "User {} rejoined guild {}: {} grant(s) restored, {} dropped",
                user_id,
                guild_id,
                outcome.restored.len(),
                outcome.dropped.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to restore grants of user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
        }
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
///
/// Moves the member's active grants aside so they can be restored on rejoin.
pub async fn handle_guild_member_removal(
    state: &AppState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if user.bot {
        return;
    }

    let guild_id = guild_id.get();
    let user_id = user.id.get();

    match state
        .promotions(&ctx.http)
        .handle_member_leave(guild_id, user_id)
        .await
    {
        Ok(0) => {}
        Ok(count) => {
            tracing::info!(
                "User {} left guild {} holding {} grant(s); snapshot saved",
                user_id,
                guild_id,
                count
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to snapshot grants of user {} leaving guild {}: {}",
                user_id,
                guild_id,
                e
            );
        }
    }
}

/// Handles the guild_member_update event when a member is updated in a guild (roles, nickname, etc.)
///
/// Role removals are compared against active grants so changes made outside the bot end
/// up in the audit log. Without the previous member state in the cache there is nothing
/// to compare against.
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(old) = old else {
        tracing::debug!(
            "No cached member for update of user {} in guild {}",
            event.user.id,
            event.guild_id
        );
        return;
    };

    let old_roles: Vec<u64> = old.roles.iter().map(|r| r.get()).collect();
    let new_roles: Vec<u64> = event.roles.iter().map(|r| r.get()).collect();
    let removed = removed_roles(&old_roles, &new_roles);

    if removed.is_empty() {
        return;
    }

    let guild_id = event.guild_id.get();
    let user_id = event.user.id.get();

    if let Err(e) = state
        .promotions(&ctx.http)
        .record_external_removals(guild_id, user_id, &removed)
        .await
    {
        tracing::error!(
            "Failed to check role removals of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}

/// Roles present before an update and missing after it.
fn removed_roles(old: &[u64], new: &[u64]) -> Vec<u64> {
    old.iter().copied().filter(|id| !new.contains(id)).collect()
}
