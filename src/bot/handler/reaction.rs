use serenity::all::{Context, Reaction};

use crate::{service::stats::StatsService, state::AppState};

/// Handles the reaction_add event, counting the reaction toward the reactor's activity.
pub async fn handle_reaction_add(state: &AppState, _ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };
    if reaction.member.as_ref().is_some_and(|m| m.user.bot) {
        return;
    }

    if let Err(e) = StatsService::new(&state.db)
        .record_reaction(guild_id.get(), user_id.get())
        .await
    {
        tracing::error!(
            "Failed to record reaction of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
