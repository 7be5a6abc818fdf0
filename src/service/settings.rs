//! Per-guild settings and the promotable admin-role allow-list.

use sea_orm::DatabaseConnection;

use crate::{
    data::{AdminRoleRepository, GuildSettingsRepository},
    error::AppError,
    model::settings::{GuildSettings, SettingsUpdate},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stored settings, or the defaults for guilds that never changed anything.
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        Ok(GuildSettingsRepository::new(self.db).get(guild_id).await?)
    }

    pub async fn update(
        &self,
        guild_id: u64,
        update: SettingsUpdate,
    ) -> Result<GuildSettings, AppError> {
        let settings = GuildSettingsRepository::new(self.db)
            .update(guild_id, update.clone())
            .await?;

        tracing::info!("Updated settings of guild {}: {:?}", guild_id, update);

        Ok(settings)
    }

    /// Adds a role to the allow-list.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The role is already allowed
    pub async fn add_admin_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        if !AdminRoleRepository::new(self.db).add(guild_id, role_id).await? {
            return Err(AppError::BadRequest(format!(
                "<@&{}> is already a promotable admin role.",
                role_id
            )));
        }

        tracing::info!("Allowed role {} for promotions in guild {}", role_id, guild_id);

        Ok(())
    }

    /// Removes a role from the allow-list.
    ///
    /// Existing grants of the role are kept and still expire normally.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The role was not allowed
    pub async fn remove_admin_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        if !AdminRoleRepository::new(self.db)
            .remove(guild_id, role_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "<@&{}> is not a promotable admin role.",
                role_id
            )));
        }

        tracing::info!(
            "Removed role {} from promotions in guild {}",
            role_id,
            guild_id
        );

        Ok(())
    }

    pub async fn admin_roles(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        Ok(AdminRoleRepository::new(self.db).list(guild_id).await?)
    }
}
