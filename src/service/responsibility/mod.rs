//! Responsibilities registry.
//!
//! A responsibility is a named duty inside a guild (moderating a channel, running events)
//! with a list of responsible members and optional Discord roles that come with it.
//! Administrators manage the registry through `resp` commands; members can apply to a
//! responsibility or suggest a new one through the responsibilities panel.
//!
//! - `mod` - Registry management and responsible assignment
//! - `request` - Apply and suggest flows with their review
//! - `embed` - Panel, info and review embeds

pub mod embed;
pub mod request;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    data::ResponsibilityRepository,
    error::AppError,
    model::responsibility::{Responsibility, ResponsibilityUpdate},
    service::{discord::DiscordGateway, guard::RoleChangeGuard},
};

/// Longest accepted responsibility name.
pub const MAX_NAME_LENGTH: usize = 64;

pub struct ResponsibilityService<'a> {
    db: &'a DatabaseConnection,
    discord: Arc<dyn DiscordGateway>,
    guard: RoleChangeGuard,
}

impl<'a> ResponsibilityService<'a> {
    /// Creates a new ResponsibilityService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for the registry and requests
    /// - `discord` - Gateway used to grant and revoke a responsibility's roles
    /// - `guard` - Guard marking the bot's own role removals
    pub fn new(
        db: &'a DatabaseConnection,
        discord: Arc<dyn DiscordGateway>,
        guard: RoleChangeGuard,
    ) -> Self {
        Self { db, discord, guard }
    }

    /// Looks a responsibility up by name, failing with a user-facing error if missing.
    async fn require(&self, guild_id: u64, name: &str) -> Result<Responsibility, AppError> {
        ResponsibilityRepository::new(self.db)
            .find_by_name(guild_id, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No responsibility named `{}`.", name.trim())))
    }

    /// Applies one field change to a named responsibility.
    async fn update(
        &self,
        guild_id: u64,
        name: &str,
        update: ResponsibilityUpdate,
    ) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;

        ResponsibilityRepository::new(self.db)
            .update(existing.id, update)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No responsibility named `{}`.", name.trim())))
    }

    /// Creates a responsibility at the end of the list.
    ///
    /// # Returns
    /// - `Ok(Responsibility)` - The created responsibility
    /// - `Err(AppError::BadRequest)` - Name empty, too long, or already used (ignoring case)
    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        description: &str,
    ) -> Result<Responsibility, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Responsibility names must be 1 to {} characters.",
                MAX_NAME_LENGTH
            )));
        }

        let repo = ResponsibilityRepository::new(self.db);
        if repo.find_by_name(guild_id, name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "A responsibility named `{}` already exists.",
                name
            )));
        }

        let responsibility = repo.create(guild_id, name, description.trim()).await?;

        tracing::info!(
            "Created responsibility '{}' ({}) in guild {}",
            responsibility.name,
            responsibility.id,
            guild_id
        );

        Ok(responsibility)
    }

    /// Deletes a responsibility and its responsibles and roles.
    ///
    /// Roles already granted to responsibles are left on them.
    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;

        ResponsibilityRepository::new(self.db)
            .delete(existing.id)
            .await?;

        tracing::info!(
            "Deleted responsibility '{}' ({}) in guild {}",
            existing.name,
            existing.id,
            guild_id
        );

        Ok(existing)
    }

    pub async fn set_description(
        &self,
        guild_id: u64,
        name: &str,
        description: &str,
    ) -> Result<Responsibility, AppError> {
        self.update(
            guild_id,
            name,
            ResponsibilityUpdate::Description(description.trim().to_string()),
        )
        .await
    }

    pub async fn set_order(
        &self,
        guild_id: u64,
        name: &str,
        sort_order: i32,
    ) -> Result<Responsibility, AppError> {
        self.update(guild_id, name, ResponsibilityUpdate::SortOrder(sort_order))
            .await
    }

    /// Sets or clears the image shown on the responsibility's info embed.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The value is not an http(s) URL
    pub async fn set_image(
        &self,
        guild_id: u64,
        name: &str,
        image_url: Option<String>,
    ) -> Result<Responsibility, AppError> {
        if let Some(url) = &image_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(AppError::BadRequest(format!(
                    "`{}` is not an image URL.",
                    url
                )));
            }
        }

        self.update(guild_id, name, ResponsibilityUpdate::ImageUrl(image_url))
            .await
    }

    /// Sets or clears the word that mentions the responsibles when it starts a message.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The word contains whitespace or belongs to another
    ///   responsibility
    pub async fn set_shortcut(
        &self,
        guild_id: u64,
        name: &str,
        shortcut: Option<String>,
    ) -> Result<Responsibility, AppError> {
        let shortcut = shortcut.map(|s| s.trim().to_lowercase());

        if let Some(word) = &shortcut {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(AppError::BadRequest(
                    "Shortcuts must be a single word.".to_string(),
                ));
            }

            let existing = self.require(guild_id, name).await?;
            if let Some(other) = ResponsibilityRepository::new(self.db)
                .find_by_shortcut(guild_id, word)
                .await?
            {
                if other.id != existing.id {
                    return Err(AppError::BadRequest(format!(
                        "`{}` is already the shortcut of `{}`.",
                        word, other.name
                    )));
                }
            }
        }

        self.update(guild_id, name, ResponsibilityUpdate::MentionShortcut(shortcut))
            .await
    }

    /// Makes a member responsible and grants them the responsibility's roles.
    ///
    /// Role grants are best-effort; failures are logged.
    ///
    /// # Returns
    /// - `Ok(Responsibility)` - The updated responsibility
    /// - `Err(AppError::BadRequest)` - The member is already responsible
    pub async fn add_responsible(
        &self,
        guild_id: u64,
        name: &str,
        user_id: u64,
    ) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;
        self.assign(existing, user_id).await
    }

    /// Adds a member to a loaded responsibility and grants its roles.
    async fn assign(
        &self,
        responsibility: Responsibility,
        user_id: u64,
    ) -> Result<Responsibility, AppError> {
        let repo = ResponsibilityRepository::new(self.db);

        if !repo.add_member(responsibility.id, user_id).await? {
            return Err(AppError::BadRequest(format!(
                "<@{}> is already responsible for `{}`.",
                user_id, responsibility.name
            )));
        }

        for role_id in &responsibility.role_ids {
            if let Err(e) = self
                .discord
                .add_role(
                    responsibility.guild_id,
                    user_id,
                    *role_id,
                    "Assigned a responsibility",
                )
                .await
            {
                tracing::warn!(
                    "Failed to grant role {} of responsibility {} to user {}: {}",
                    role_id,
                    responsibility.id,
                    user_id,
                    e
                );
            }
        }

        tracing::info!(
            "User {} is now responsible for '{}' in guild {}",
            user_id,
            responsibility.name,
            responsibility.guild_id
        );

        self.reload(responsibility.id).await
    }

    /// Removes a responsible and revokes the responsibility's roles.
    ///
    /// Role removals are best-effort; failures are logged.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The member was not responsible
    pub async fn remove_responsible(
        &self,
        guild_id: u64,
        name: &str,
        user_id: u64,
    ) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;

        if !ResponsibilityRepository::new(self.db)
            .remove_member(existing.id, user_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "<@{}> is not responsible for `{}`.",
                user_id, existing.name
            )));
        }

        for role_id in &existing.role_ids {
            self.guard.mark(guild_id, user_id, *role_id).await;
            if let Err(e) = self
                .discord
                .remove_role(guild_id, user_id, *role_id, "Unassigned from a responsibility")
                .await
            {
                tracing::warn!(
                    "Failed to revoke role {} of responsibility {} from user {}: {}",
                    role_id,
                    existing.id,
                    user_id,
                    e
                );
            }
        }

        tracing::info!(
            "User {} is no longer responsible for '{}' in guild {}",
            user_id,
            existing.name,
            guild_id
        );

        self.reload(existing.id).await
    }

    /// Attaches a Discord role that responsibles receive.
    ///
    /// Existing responsibles are not granted the role retroactively.
    pub async fn add_role(
        &self,
        guild_id: u64,
        name: &str,
        role_id: u64,
    ) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;

        if !ResponsibilityRepository::new(self.db)
            .add_role(existing.id, role_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "<@&{}> is already attached to `{}`.",
                role_id, existing.name
            )));
        }

        self.reload(existing.id).await
    }

    pub async fn remove_role(
        &self,
        guild_id: u64,
        name: &str,
        role_id: u64,
    ) -> Result<Responsibility, AppError> {
        let existing = self.require(guild_id, name).await?;

        if !ResponsibilityRepository::new(self.db)
            .remove_role(existing.id, role_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "<@&{}> is not attached to `{}`.",
                role_id, existing.name
            )));
        }

        self.reload(existing.id).await
    }

    /// Lists a guild's responsibilities by sort order, then name.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Responsibility>, AppError> {
        Ok(ResponsibilityRepository::new(self.db).list(guild_id).await?)
    }

    /// Finds a responsibility by name, ignoring case.
    pub async fn get_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<Responsibility>, AppError> {
        Ok(ResponsibilityRepository::new(self.db)
            .find_by_name(guild_id, name)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Responsibility>, AppError> {
        Ok(ResponsibilityRepository::new(self.db).find_by_id(id).await?)
    }

    /// Resolves a message's first word against the guild's mention shortcuts.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Mentions of the matching responsibility's responsibles
    /// - `Ok(None)` - The word is not a shortcut, or nobody holds the responsibility
    pub async fn mention_shortcut(
        &self,
        guild_id: u64,
        content: &str,
    ) -> Result<Option<String>, AppError> {
        let Some(word) = content.split_whitespace().next() else {
            return Ok(None);
        };

        let Some(responsibility) = ResponsibilityRepository::new(self.db)
            .find_by_shortcut(guild_id, word)
            .await?
        else {
            return Ok(None);
        };

        if responsibility.responsibles.is_empty() {
            return Ok(None);
        }

        Ok(Some(format!(
            "**{}**: {}",
            responsibility.name,
            responsibility.responsible_mentions()
        )))
    }

    async fn reload(&self, id: i32) -> Result<Responsibility, AppError> {
        ResponsibilityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("That responsibility no longer exists.".to_string()))
    }
}
