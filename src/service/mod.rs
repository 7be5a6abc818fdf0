//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data (repository) layer. They
//! validate requests, coordinate repository calls with Discord API calls made through
//! `discord::DiscordGateway`, and return domain models.

pub mod application;
pub mod discord;
pub mod guard;
pub mod promotion;
pub mod responsibility;
pub mod settings;
pub mod stats;

#[cfg(test)]
mod test;
