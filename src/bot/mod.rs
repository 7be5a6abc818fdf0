//! Discord bot: gateway events, chat commands and component interactions.
//!
//! The bot is initialized during startup and runs in its own tokio task. Its HTTP client
//! is shared with the expiry scheduler, which removes roles and posts log entries
//! without a second gateway connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and roles
//! - `GUILD_MEMBERS` - Joins, leaves and role changes (privileged intent)
//! - `GUILD_MESSAGES` / `MESSAGE_CONTENT` - Chat commands and activity stats
//!   (`MESSAGE_CONTENT` is privileged)
//! - `GUILD_MESSAGE_REACTIONS` - Reaction stats
//! - `GUILD_VOICE_STATES` - Voice time stats
//! - `DIRECT_MESSAGES` - Opening DM channels for notifications
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod command;
pub mod handler;
pub mod interaction;
pub mod panel;
pub mod permission;
pub mod start;
