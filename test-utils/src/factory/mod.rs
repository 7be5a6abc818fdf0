//! Factory methods for creating test data.
//!
//! Each table has a `create_*` convenience function with sensible defaults; the tables tests
//! customise most often also have a builder-style `Factory` struct.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     factory::create_admin_role(&db, "1", "10").await?;
//!     let grant = factory::create_grant(&db, "1", "2", "10").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_settings` - Per-guild settings and the admin-role allow-list
//! - `promotion_grant` - Active grants and left-member snapshots
//! - `promotion_ban` - Promotion bans
//! - `responsibility` - Responsibilities, their members, roles and requests
//! - `admin_application` - Admin applications and rejection cooldowns
//! - `user_activity` - Activity totals and daily rows
//! - `helpers` - Unique id generation

pub mod admin_application;
pub mod guild_settings;
pub mod helpers;
pub mod promotion_ban;
pub mod promotion_grant;
pub mod responsibility;
pub mod user_activity;

pub use admin_application::{create_application, create_cooldown};
pub use guild_settings::{create_admin_role, create_guild_settings};
pub use helpers::{next_id, next_snowflake};
pub use promotion_ban::{create_ban, create_ban_until};
pub use promotion_grant::{create_expired_grant, create_grant, create_left_member_grant};
pub use responsibility::{
    create_apply_request, create_responsibility, create_responsibility_member,
    create_responsibility_role, create_suggest_request,
};
pub use user_activity::{create_activity, create_daily_activity};
