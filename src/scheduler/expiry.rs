use chrono::Utc;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::AppState};

/// Clears expired application cooldowns once a day at 04:00 UTC.
const COOLDOWN_CLEANUP_CRON: &str = "0 0 4 * * *";

/// Starts the expiry scheduler
///
/// Three jobs run on the cron schedules from the configuration:
/// - Expired grants lose their role (every minute by default)
/// - Expired promotion bans are lifted (every 10 seconds by default)
/// - Lapsed application cooldowns are deleted (daily)
///
/// Each run only acts on records that are already past their end, so a run that overlaps
/// or repeats a previous one changes nothing.
///
/// # Arguments
/// - `state`: Shared state with the database and role change guard
/// - `discord_http`: Discord HTTP client for role removals and log posts
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job_http = discord_http.clone();
    let grant_job = Job::new_async(state.config.grant_poll_cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = state.promotions(&http).expire_grants(Utc::now()).await {
                tracing::error!("Error expiring grants: {}", e);
            }
        })
    })?;

    let job_state = state.clone();
    let job_http = discord_http.clone();
    let ban_job = Job::new_async(state.config.ban_poll_cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = state.promotions(&http).expire_bans(Utc::now()).await {
                tracing::error!("Error expiring promotion bans: {}", e);
            }
        })
    })?;

    let job_state = state.clone();
    let job_http = discord_http.clone();
    let cooldown_job = Job::new_async(COOLDOWN_CLEANUP_CRON, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = state
                .applications(&http)
                .clear_expired_cooldowns(Utc::now())
                .await
            {
                tracing::error!("Error clearing application cooldowns: {}", e);
            }
        })
    })?;

    scheduler.add(grant_job).await?;
    scheduler.add(ban_job).await?;
    scheduler.add(cooldown_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Expiry scheduler started (grants: {}, bans: {})",
        state.config.grant_poll_cron,
        state.config.ban_poll_cron
    );

    Ok(())
}
