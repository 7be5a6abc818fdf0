mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{bot::start, config::Config, error::AppError, scheduler::expiry, state::AppState};

const DEFAULT_LOG_FILTER: &str = "info,rolekeeper=debug";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config);

    tracing::info!("Starting rolekeeper");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = start::init_bot(state.clone()).await?;

    // Start expiry polling alongside the bot
    let scheduler_state = state.clone();
    let scheduler_http = discord_http.clone();
    tokio::spawn(async move {
        if let Err(e) = expiry::start_scheduler(scheduler_state, scheduler_http).await {
            tracing::error!("Expiry scheduler error: {}", e);
        }
    });

    // The gateway connection runs until the process is stopped
    start::start_bot(bot_client).await
}
