//! Responsibility registry repository.
//!
//! A responsibility row owns its member and role rows. Child rows are deleted explicitly
//! before the parent so removal does not depend on foreign key enforcement.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::responsibility::{Responsibility, ResponsibilityUpdate};

/// Repository for responsibilities, their responsibles and their roles.
pub struct ResponsibilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResponsibilityRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the member and role rows of a responsibility and builds the domain model.
    async fn load(&self, entity: entity::responsibility::Model) -> Result<Responsibility, DbErr> {
        let members = entity
            .find_related(entity::prelude::ResponsibilityMember)
            .order_by_asc(entity::responsibility_member::Column::Id)
            .all(self.db)
            .await?;
        let roles = entity
            .find_related(entity::prelude::ResponsibilityRole)
            .order_by_asc(entity::responsibility_role::Column::Id)
            .all(self.db)
            .await?;

        Responsibility::from_entity(entity, members, roles)
    }

    /// Creates a responsibility with no responsibles or roles.
    ///
    /// New responsibilities are placed after every existing one.
    ///
    /// # Returns
    /// - `Ok(Responsibility)` - The created responsibility
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        description: &str,
    ) -> Result<Responsibility, DbErr> {
        let last = entity::prelude::Responsibility::find()
            .filter(entity::responsibility::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::responsibility::Column::SortOrder)
            .one(self.db)
            .await?;
        let sort_order = last.map(|r| r.sort_order + 1).unwrap_or(0);

        let entity = entity::responsibility::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            sort_order: ActiveValue::Set(sort_order),
            image_url: ActiveValue::Set(None),
            mention_shortcut: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Responsibility::from_entity(entity, Vec::new(), Vec::new())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Responsibility>, DbErr> {
        match entity::prelude::Responsibility::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(entity) => self.load(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Finds a responsibility by name, ignoring case.
    pub async fn find_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<Responsibility>, DbErr> {
        let wanted = name.trim().to_lowercase();
        let found = entity::prelude::Responsibility::find()
            .filter(entity::responsibility::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .find(|r| r.name.to_lowercase() == wanted);

        match found {
            Some(entity) => self.load(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Finds the responsibility whose mention shortcut equals `word`, ignoring case.
    pub async fn find_by_shortcut(
        &self,
        guild_id: u64,
        word: &str,
    ) -> Result<Option<Responsibility>, DbErr> {
        let wanted = word.to_lowercase();
        let found = entity::prelude::Responsibility::find()
            .filter(entity::responsibility::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::responsibility::Column::MentionShortcut.is_not_null())
            .all(self.db)
            .await?
            .into_iter()
            .find(|r| {
                r.mention_shortcut
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase() == wanted)
            });

        match found {
            Some(entity) => self.load(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Lists a guild's responsibilities by sort order, then name.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Responsibility>, DbErr> {
        let entities = entity::prelude::Responsibility::find()
            .filter(entity::responsibility::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::responsibility::Column::SortOrder)
            .order_by_asc(entity::responsibility::Column::Name)
            .all(self.db)
            .await?;

        let mut responsibilities = Vec::with_capacity(entities.len());
        for entity in entities {
            responsibilities.push(self.load(entity).await?);
        }

        Ok(responsibilities)
    }

    /// Applies one field change.
    ///
    /// # Returns
    /// - `Ok(Some(Responsibility))` - The updated responsibility
    /// - `Ok(None)` - No responsibility with that id exists
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        update: ResponsibilityUpdate,
    ) -> Result<Option<Responsibility>, DbErr> {
        let Some(existing) = entity::prelude::Responsibility::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::responsibility::ActiveModel = existing.into();
        match update {
            ResponsibilityUpdate::Description(description) => {
                active.description = ActiveValue::Set(description)
            }
            ResponsibilityUpdate::SortOrder(order) => active.sort_order = ActiveValue::Set(order),
            ResponsibilityUpdate::ImageUrl(url) => active.image_url = ActiveValue::Set(url),
            ResponsibilityUpdate::MentionShortcut(shortcut) => {
                active.mention_shortcut = ActiveValue::Set(shortcut)
            }
        }

        let entity = active.update(self.db).await?;

        self.load(entity).await.map(Some)
    }

    /// Deletes a responsibility with its member and role rows.
    ///
    /// # Returns
    /// - `Ok(true)` - The responsibility was deleted
    /// - `Ok(false)` - No responsibility with that id existed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ResponsibilityMember::delete_many()
            .filter(entity::responsibility_member::Column::ResponsibilityId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::ResponsibilityRole::delete_many()
            .filter(entity::responsibility_role::Column::ResponsibilityId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Responsibility::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a responsible.
    ///
    /// # Returns
    /// - `Ok(true)` - The member was added
    /// - `Ok(false)` - The member already held the responsibility
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add_member(&self, id: i32, user_id: u64) -> Result<bool, DbErr> {
        let existing = entity::prelude::ResponsibilityMember::find()
            .filter(entity::responsibility_member::Column::ResponsibilityId.eq(id))
            .filter(entity::responsibility_member::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::responsibility_member::ActiveModel {
            responsibility_id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id.to_string()),
            added_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn remove_member(&self, id: i32, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::ResponsibilityMember::delete_many()
            .filter(entity::responsibility_member::Column::ResponsibilityId.eq(id))
            .filter(entity::responsibility_member::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn add_role(&self, id: i32, role_id: u64) -> Result<bool, DbErr> {
        let existing = entity::prelude::ResponsibilityRole::find()
            .filter(entity::responsibility_role::Column::ResponsibilityId.eq(id))
            .filter(entity::responsibility_role::Column::RoleId.eq(role_id.to_string()))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::responsibility_role::ActiveModel {
            responsibility_id: ActiveValue::Set(id),
            role_id: ActiveValue::Set(role_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    pub async fn remove_role(&self, id: i32, role_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::ResponsibilityRole::delete_many()
            .filter(entity::responsibility_role::Column::ResponsibilityId.eq(id))
            .filter(entity::responsibility_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
