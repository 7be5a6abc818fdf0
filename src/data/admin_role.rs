//! Promotable admin-role allow-list repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::parse_snowflake;

/// Repository for the per-guild list of roles the bot may grant.
pub struct AdminRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a role to the allow-list.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was added
    /// - `Ok(false)` - Role was already allowed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, guild_id: u64, role_id: u64) -> Result<bool, DbErr> {
        if self.contains(guild_id, role_id).await? {
            return Ok(false);
        }

        entity::promotion_admin_role::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a role from the allow-list.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was removed
    /// - `Ok(false)` - Role was not on the list
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(&self, guild_id: u64, role_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PromotionAdminRole::delete_many()
            .filter(entity::promotion_admin_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_admin_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn contains(&self, guild_id: u64, role_id: u64) -> Result<bool, DbErr> {
        let existing = entity::prelude::PromotionAdminRole::find()
            .filter(entity::promotion_admin_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_admin_role::Column::RoleId.eq(role_id.to_string()))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Lists the allow-listed role ids of a guild in insertion order.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<u64>, DbErr> {
        entity::prelude::PromotionAdminRole::find()
            .filter(entity::promotion_admin_role::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::promotion_admin_role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|model| parse_snowflake(&model.role_id, "role_id"))
            .collect()
    }
}
