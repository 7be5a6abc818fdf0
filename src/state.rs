//! State shared by every event handler and the scheduler.
//!
//! `AppState` is built once at startup and cloned into the event handler. Every field is
//! cheap to clone: the database connection is a pool, and the config, guard and voice
//! sessions are reference-counted.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::Config,
    service::{
        application::AdminApplicationService,
        discord::{DiscordGateway, SerenityGateway},
        guard::RoleChangeGuard,
        promotion::PromotionService,
        responsibility::ResponsibilityService,
        stats::VoiceSessions,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,

    /// Role removals the bot is about to make, shared with the member-update listener.
    pub guard: RoleChangeGuard,

    /// Open voice sessions, keyed by guild and user.
    pub voice: Arc<VoiceSessions>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            guard: RoleChangeGuard::new(),
            voice: Arc::new(VoiceSessions::new()),
        }
    }

    /// Gateway over the bot's HTTP client.
    pub fn gateway(http: &Arc<Http>) -> Arc<dyn DiscordGateway> {
        Arc::new(SerenityGateway::new(http.clone()))
    }

    pub fn promotions(&self, http: &Arc<Http>) -> PromotionService<'_> {
        PromotionService::new(&self.db, Self::gateway(http), self.guard.clone())
    }

    pub fn applications(&self, http: &Arc<Http>) -> AdminApplicationService<'_> {
        AdminApplicationService::new(&self.db, Self::gateway(http), self.guard.clone())
    }

    pub fn responsibilities(&self, http: &Arc<Http>) -> ResponsibilityService<'_> {
        ResponsibilityService::new(&self.db, Self::gateway(http), self.guard.clone())
    }
}
