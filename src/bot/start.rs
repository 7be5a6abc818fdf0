use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting.
///
/// The HTTP client is returned alongside so the scheduler can use it while the gateway
/// connection runs in its own task.
///
/// # Arguments
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::DIRECT_MESSAGES;

    let token = state.config.discord_bot_token.clone();
    let handler = Handler::new(state);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
///
/// Should be called from within a tokio::spawn task since it blocks until the bot
/// disconnects.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
