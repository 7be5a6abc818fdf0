//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Logs who the bot connected as
//! and sets its activity.

use serenity::all::{ActivityData, Context, Ready};

pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("over promotions")));
}
