//! Discord API access used by the services.
//!
//! Services never hold a serenity `Http` client directly. They talk to a `DiscordGateway`,
//! which the running bot backs with `SerenityGateway` and tests back with an in-memory fake.

pub mod gateway;

pub use gateway::{DiscordGateway, GuildRoster, MemberSnapshot, SerenityGateway};
