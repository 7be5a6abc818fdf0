use chrono::Utc;
use serenity::all::{Context, VoiceState};

use crate::{service::stats::StatsService, state::AppState};

/// Handles the voice_state_update event.
///
/// A session starts when a member is first seen in a voice channel and ends when they
/// leave voice entirely; moving between channels keeps the session. Finished sessions
/// are added to the member's voice minutes.
pub async fn handle_voice_state_update(
    state: &AppState,
    _ctx: Context,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };
    if new.member.as_ref().is_some_and(|m| m.user.bot) {
        return;
    }

    let guild_id = guild_id.get();
    let user_id = new.user_id.get();
    let now = Utc::now();

    if new.channel_id.is_some() {
        state.voice.join(guild_id, user_id, now).await;
        return;
    }

    let Some(minutes) = state.voice.leave(guild_id, user_id, now).await else {
        return;
    };

    tracing::debug!(
        "User {} spent {} minute(s) in voice in guild {}",
        user_id,
        minutes,
        guild_id
    );

    if let Err(e) = StatsService::new(&state.db)
        .record_voice_minutes(guild_id, user_id, minutes)
        .await
    {
        tracing::error!(
            "Failed to record voice time of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
