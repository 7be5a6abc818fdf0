//! Admin application pipeline.
//!
//! Any member can nominate a candidate for an admin role. The nomination is stored with a
//! snapshot of the candidate's activity and posted for review; approving it grants a
//! permanent promotion through `PromotionService`, rejecting it puts the candidate on a
//! cooldown before they can be nominated again.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;
use serenity::all::{CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp};
use std::sync::Arc;

use crate::{
    data::{
        AdminApplicationRepository, ApplicationCooldownRepository, GuildSettingsRepository,
        PromotionBanRepository,
    },
    error::{promotion::PromotionError, AppError},
    model::{
        application::{AdminApplication, ApplicationCooldown, APPLICATION_ID_LENGTH, APPROVAL_REASON},
        duration::PromotionDuration,
        promotion::{CreatePromotionParam, PromotionGrant},
    },
    service::{
        discord::DiscordGateway, guard::RoleChangeGuard, promotion::PromotionService,
        stats::StatsService,
    },
    util::time::discord_relative,
};

const COLOR_PENDING: u32 = 0x3498db;

pub struct AdminApplicationService<'a> {
    db: &'a DatabaseConnection,
    discord: Arc<dyn DiscordGateway>,
    guard: RoleChangeGuard,
}

impl<'a> AdminApplicationService<'a> {
    /// Creates a new AdminApplicationService instance.
    ///
    /// The gateway and guard are handed on to `PromotionService` when an application is
    /// approved.
    pub fn new(
        db: &'a DatabaseConnection,
        discord: Arc<dyn DiscordGateway>,
        guard: RoleChangeGuard,
    ) -> Self {
        Self { db, discord, guard }
    }

    /// Nominates a candidate for an admin role.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the nomination is for
    /// - `candidate_id` - Member being nominated
    /// - `requester_id` - Member making the nomination
    ///
    /// # Returns
    /// - `Ok(AdminApplication)` - The stored application
    /// - `Err(AppError::PromotionErr)` - Candidate is missing, a bot, on cooldown, already
    ///   nominated or banned from promotions
    /// - `Err(AppError::DiscordErr)` - Failed to look the candidate up
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(
        &self,
        guild_id: u64,
        candidate_id: u64,
        requester_id: u64,
    ) -> Result<AdminApplication, AppError> {
        let candidate = self
            .discord
            .member(guild_id, candidate_id)
            .await?
            .ok_or(PromotionError::MemberNotFound)?;

        if candidate.is_bot {
            return Err(PromotionError::CandidateIsBot.into());
        }

        let now = Utc::now();
        if let Some(cooldown) = ApplicationCooldownRepository::new(self.db)
            .find_active(guild_id, candidate_id, now)
            .await?
        {
            return Err(PromotionError::CandidateOnCooldown(cooldown.until.timestamp()).into());
        }

        let application_repo = AdminApplicationRepository::new(self.db);
        if application_repo
            .find_by_candidate(guild_id, candidate_id)
            .await?
            .is_some()
        {
            return Err(PromotionError::ApplicationPending.into());
        }

        if PromotionBanRepository::new(self.db)
            .find_active(guild_id, candidate_id, now)
            .await?
            .is_some()
        {
            return Err(PromotionError::TargetBanned.into());
        }

        let stats = StatsService::new(self.db)
            .snapshot(guild_id, candidate_id)
            .await?;

        let mut id = generate_application_id();
        while application_repo.find_by_id(&id).await?.is_some() {
            id = generate_application_id();
        }

        let application = application_repo
            .create(&id, guild_id, candidate_id, requester_id, &stats)
            .await?;

        tracing::info!(
            "User {} nominated user {} for admin in guild {} (application {})",
            requester_id,
            candidate_id,
            guild_id,
            application.id
        );

        Ok(application)
    }

    /// Posts the review message of a freshly submitted application and records where it is.
    ///
    /// Reviewers can only decide an application through its message, so when posting fails
    /// the application is withdrawn and the candidate can be nominated again right away.
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the posted review message
    /// - `Err(AppError::DiscordErr)` - Posting failed; the application was deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn post_for_review(
        &self,
        application: &AdminApplication,
        channel_id: u64,
        review: CreateMessage,
    ) -> Result<u64, AppError> {
        let application_repo = AdminApplicationRepository::new(self.db);

        let message_id = match self.discord.send_message(channel_id, review).await {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::warn!(
                    "Failed to post application {} to channel {}, withdrawing it: {}",
                    application.id,
                    channel_id,
                    e
                );
                application_repo.delete(&application.id).await?;
                return Err(e);
            }
        };

        application_repo
            .set_message(&application.id, channel_id, message_id)
            .await?;

        Ok(message_id)
    }

    pub async fn find(&self, id: &str) -> Result<Option<AdminApplication>, AppError> {
        Ok(AdminApplicationRepository::new(self.db).find_by_id(id).await?)
    }

    /// Approves an application by permanently granting the chosen role.
    ///
    /// The application is deleted only after the grant succeeds, so a failed approval can
    /// be retried.
    ///
    /// # Returns
    /// - `Ok((AdminApplication, PromotionGrant))` - The approved application and new grant
    /// - `Err(AppError::PromotionErr(ApplicationNotFound))` - Already decided or never existed
    /// - `Err(AppError::PromotionErr)` - The promotion itself was rejected
    pub async fn approve(
        &self,
        id: &str,
        role_id: u64,
        approver_id: u64,
    ) -> Result<(AdminApplication, PromotionGrant), AppError> {
        let application_repo = AdminApplicationRepository::new(self.db);
        let application = application_repo
            .find_by_id(id)
            .await?
            .ok_or(PromotionError::ApplicationNotFound)?;

        let grant = PromotionService::new(self.db, self.discord.clone(), self.guard.clone())
            .create_promotion(CreatePromotionParam {
                guild_id: application.guild_id,
                target_id: application.candidate_id,
                role_id,
                granter_id: approver_id,
                duration: PromotionDuration::Permanent,
                reason: APPROVAL_REASON.to_string(),
            })
            .await?;

        application_repo.delete(id).await?;

        tracing::info!(
            "Application {} approved by user {} with role {}",
            id,
            approver_id,
            role_id
        );

        Ok((application, grant))
    }

    /// Rejects an application and puts the candidate on cooldown.
    ///
    /// The cooldown length comes from the guild's settings. The candidate is told by DM;
    /// a failed DM is only logged.
    ///
    /// # Returns
    /// - `Ok((AdminApplication, ApplicationCooldown))` - The rejected application and cooldown
    /// - `Err(AppError::PromotionErr(ApplicationNotFound))` - Already decided or never existed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reject(
        &self,
        id: &str,
        rejecter_id: u64,
        reason: &str,
    ) -> Result<(AdminApplication, ApplicationCooldown), AppError> {
        let application_repo = AdminApplicationRepository::new(self.db);
        let application = application_repo
            .find_by_id(id)
            .await?
            .ok_or(PromotionError::ApplicationNotFound)?;

        if !application_repo.delete(id).await? {
            return Err(PromotionError::ApplicationNotFound.into());
        }

        let settings = GuildSettingsRepository::new(self.db)
            .get(application.guild_id)
            .await?;
        let until = Utc::now() + TimeDelta::hours(settings.application_cooldown_hours as i64);

        let cooldown = ApplicationCooldownRepository::new(self.db)
            .upsert(
                application.guild_id,
                application.candidate_id,
                rejecter_id,
                reason,
                until,
            )
            .await?;

        tracing::info!(
            "Application {} rejected by user {}; candidate {} on cooldown until {}",
            id,
            rejecter_id,
            application.candidate_id,
            until
        );

        let message = CreateMessage::new().embed(rejection_dm_embed(&cooldown));
        if let Err(e) = self
            .discord
            .send_dm(application.candidate_id, message)
            .await
        {
            tracing::warn!(
                "Failed to DM rejected candidate {}: {}",
                application.candidate_id,
                e
            );
        }

        Ok((application, cooldown))
    }

    /// Deletes cooldowns that have run out.
    pub async fn clear_expired_cooldowns(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let cleared = ApplicationCooldownRepository::new(self.db)
            .delete_expired(now)
            .await?;

        if cleared > 0 {
            tracing::info!("Cleared {} expired application cooldown(s)", cleared);
        }

        Ok(cleared)
    }
}

/// Generates a random alphanumeric application id.
fn generate_application_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..APPLICATION_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Review embed for a pending application.
pub fn application_embed(application: &AdminApplication) -> CreateEmbed {
    let stats = application
        .user_stats_snapshot
        .as_ref()
        .map(|s| s.summary())
        .unwrap_or_else(|| "No activity recorded".to_string());

    CreateEmbed::new()
        .title("Admin application")
        .color(COLOR_PENDING)
        .description(format!(
            "<@{}> was nominated by <@{}> {}.",
            application.candidate_id,
            application.requester_id,
            discord_relative(application.created_at)
        ))
        .field("Activity", stats, false)
        .footer(CreateEmbedFooter::new(format!("Application {}", application.id)))
        .timestamp(Timestamp::from(application.created_at))
}

fn rejection_dm_embed(cooldown: &ApplicationCooldown) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Admin application rejected")
        .color(0xe74c3c)
        .description(format!(
            "Your nomination was not accepted. You can be nominated again {}.",
            discord_relative(cooldown.until)
        ));

    if !cooldown.reason.trim().is_empty() {
        embed = embed.field("Reason", &cooldown.reason, false);
    }

    embed
}
