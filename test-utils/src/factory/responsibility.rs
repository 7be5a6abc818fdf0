//! Responsibility registry factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating responsibilities.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::responsibility::ResponsibilityFactory;
///
/// let resp = ResponsibilityFactory::new(&db, "123")
///     .name("Events")
///     .mention_shortcut(Some("@events".to_string()))
///     .build()
///     .await?;
/// ```
pub struct ResponsibilityFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    description: String,
    sort_order: i32,
    mention_shortcut: Option<String>,
}

impl<'a> ResponsibilityFactory<'a> {
    /// Creates a new factory.
    ///
    /// Defaults:
    /// - name: `"Responsibility {id}"`
    /// - description: `"Test responsibility"`
    /// - sort_order: `0`
    /// - no shortcut
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            name: format!("Responsibility {}", next_id()),
            description: "Test responsibility".to_string(),
            sort_order: 0,
            mention_shortcut: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn mention_shortcut(mut self, shortcut: Option<String>) -> Self {
        self.mention_shortcut = shortcut;
        self
    }

    pub async fn build(self) -> Result<entity::responsibility::Model, DbErr> {
        entity::responsibility::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            sort_order: ActiveValue::Set(self.sort_order),
            image_url: ActiveValue::Set(None),
            mention_shortcut: ActiveValue::Set(self.mention_shortcut),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a responsibility with default values.
pub async fn create_responsibility(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::responsibility::Model, DbErr> {
    ResponsibilityFactory::new(db, guild_id).build().await
}

/// Adds a user as a responsible of a responsibility.
pub async fn create_responsibility_member(
    db: &DatabaseConnection,
    responsibility_id: i32,
    user_id: &str,
) -> Result<entity::responsibility_member::Model, DbErr> {
    entity::responsibility_member::ActiveModel {
        responsibility_id: ActiveValue::Set(responsibility_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        added_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a Discord role to a responsibility.
pub async fn create_responsibility_role(
    db: &DatabaseConnection,
    responsibility_id: i32,
    role_id: &str,
) -> Result<entity::responsibility_role::Model, DbErr> {
    entity::responsibility_role::ActiveModel {
        responsibility_id: ActiveValue::Set(responsibility_id),
        role_id: ActiveValue::Set(role_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending application to join a responsibility.
pub async fn create_apply_request(
    db: &DatabaseConnection,
    guild_id: &str,
    responsibility_id: i32,
    user_id: &str,
) -> Result<entity::responsibility_request::Model, DbErr> {
    entity::responsibility_request::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        kind: ActiveValue::Set("apply".to_string()),
        responsibility_id: ActiveValue::Set(Some(responsibility_id)),
        user_id: ActiveValue::Set(user_id.to_string()),
        suggested_name: ActiveValue::Set(None),
        content: ActiveValue::Set("I would like to help".to_string()),
        status: ActiveValue::Set("pending".to_string()),
        channel_id: ActiveValue::Set(None),
        message_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        decided_by: ActiveValue::Set(None),
        decided_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending suggestion for a new responsibility.
pub async fn create_suggest_request(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    name: &str,
) -> Result<entity::responsibility_request::Model, DbErr> {
    entity::responsibility_request::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        kind: ActiveValue::Set("suggest".to_string()),
        responsibility_id: ActiveValue::Set(None),
        user_id: ActiveValue::Set(user_id.to_string()),
        suggested_name: ActiveValue::Set(Some(name.to_string())),
        content: ActiveValue::Set("Someone should own this".to_string()),
        status: ActiveValue::Set("pending".to_string()),
        channel_id: ActiveValue::Set(None),
        message_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        decided_by: ActiveValue::Set(None),
        decided_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
