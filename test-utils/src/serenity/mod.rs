//! Test factories for creating Serenity API objects.
//!
//! Code that converts Serenity structs into the bot's own snapshots needs real Serenity
//! values in tests. These factories deserialize them from JSON shaped like Discord's API
//! payloads.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;

pub use member::create_test_member;
pub use role::create_test_role;
