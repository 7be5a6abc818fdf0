use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test needs, then call `build()` to get a context backed by a
/// fresh in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{PromotionGrant, PromotionLog};
///
/// let test = TestBuilder::new()
///     .with_table(PromotionGrant)
///     .with_table(PromotionLog)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new builder with no tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables are
    /// created in the order they were added.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the promotion lifecycle touches.
    ///
    /// Settings, admin-role allow-list, grants, bans, the audit log, left-member snapshots
    /// and the activity tables used for stats snapshots.
    pub fn with_promotion_tables(self) -> Self {
        self.with_table(GuildSettings)
            .with_table(PromotionAdminRole)
            .with_table(PromotionGrant)
            .with_table(PromotionBan)
            .with_table(PromotionLog)
            .with_table(LeftMemberGrant)
            .with_table(UserActivity)
            .with_table(UserActivityDaily)
    }

    /// Adds the promotion tables plus admin applications and cooldowns.
    pub fn with_application_tables(self) -> Self {
        self.with_promotion_tables()
            .with_table(AdminApplication)
            .with_table(ApplicationCooldown)
    }

    /// Adds the responsibility registry tables.
    pub fn with_responsibility_tables(self) -> Self {
        self.with_table(GuildSettings)
            .with_table(Responsibility)
            .with_table(ResponsibilityMember)
            .with_table(ResponsibilityRole)
            .with_table(ResponsibilityRequest)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
