//! Rolekeeper Test Utils
//!
//! Shared testing utilities for the bot's repository and service tests. Tests get an
//! in-memory SQLite database with only the tables they need, factories that insert rows
//! with sensible defaults, and Serenity objects built from JSON the way Discord would send
//! them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn ends_grant() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let grant = factory::create_grant(db, "1", "2", "3").await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
