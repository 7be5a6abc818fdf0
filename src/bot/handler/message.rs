use serenity::all::{Context, CreateMessage, Message};

use crate::{
    bot::{
        command::{self, Command, Invocation},
        permission::Access,
    },
    error::{command::CommandError, AppError},
    service::stats::StatsService,
    state::AppState,
};

/// Handle message creation in a channel
///
/// Guild messages from people count toward activity stats. Messages with the command
/// prefix run the command; anything else is checked for a responsibility shortcut.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    // Only guild messages from people
    if message.author.bot {
        return;
    }
    let Some(guild_id) = message.guild_id else {
        return;
    };
    let guild_id = guild_id.get();
    let user_id = message.author.id.get();

    if let Err(e) = StatsService::new(&state.db)
        .record_message(guild_id, user_id)
        .await
    {
        tracing::error!(
            "Failed to record message of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }

    match Command::parse(&message.content, &state.config.prefix) {
        Some(parsed) => run_command(state, &ctx, &message, guild_id, parsed).await,
        None => mention_shortcut(state, &ctx, &message, guild_id).await,
    }
}

async fn run_command(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    guild_id: u64,
    parsed: Result<Command, CommandError>,
) {
    let inv = Invocation {
        state,
        http: &ctx.http,
        guild_id,
        channel_id: message.channel_id.get(),
        user_id: message.author.id.get(),
    };

    let result = match parsed {
        Ok(command) => {
            tracing::debug!(
                "User {} ran {:?} in guild {}",
                inv.user_id,
                command,
                guild_id
            );
            match authorize(&inv, message, &command).await {
                Ok(()) => command::execute(&inv, command).await,
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e.into()),
    };

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => CreateMessage::new().content(e.user_message()),
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, reply.reference_message(message))
        .await
    {
        tracing::warn!(
            "Failed to reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

/// Checks the author may run the command.
async fn authorize(inv: &Invocation<'_>, message: &Message, command: &Command) -> Result<(), AppError> {
    let required = command.required_access();
    if required == Access::Member {
        return Ok(());
    }

    let role_ids: Vec<u64> = message
        .member
        .as_ref()
        .map(|m| m.roles.iter().map(|r| r.get()).collect())
        .unwrap_or_default();
    let roster = AppState::gateway(inv.http)
        .guild_roster(inv.guild_id)
        .await?;

    Access::resolve(&inv.state.config, &roster, inv.user_id, &role_ids).require(required)?;

    Ok(())
}

/// Pings the people responsible when a message starts with a responsibility shortcut.
async fn mention_shortcut(state: &AppState, ctx: &Context, message: &Message, guild_id: u64) {
    let mentions = match state
        .responsibilities(&ctx.http)
        .mention_shortcut(guild_id, &message.content)
        .await
    {
        Ok(Some(mentions)) => mentions,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to resolve shortcut in guild {}: {}", guild_id, e);
            return;
        }
    };

    if let Err(e) = message.reply(&ctx.http, mentions).await {
        tracing::warn!(
            "Failed to send shortcut mentions in channel {}: {}",
            message.channel_id,
            e
        );
    }
}
