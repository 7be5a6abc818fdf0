//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table (or a table and its children) and return
//! domain models from `crate::model`, converting entity models at the boundary. Discord ids
//! are stored as strings and parsed back into `u64` on the way out.

pub mod admin_application;
pub mod admin_role;
pub mod application_cooldown;
pub mod guild_settings;
pub mod left_member;
pub mod promotion_ban;
pub mod promotion_grant;
pub mod promotion_log;
pub mod responsibility;
pub mod responsibility_request;
pub mod user_activity;

#[cfg(test)]
mod test;

pub use admin_application::AdminApplicationRepository;
pub use admin_role::AdminRoleRepository;
pub use application_cooldown::ApplicationCooldownRepository;
pub use guild_settings::GuildSettingsRepository;
pub use left_member::LeftMemberRepository;
pub use promotion_ban::PromotionBanRepository;
pub use promotion_grant::PromotionGrantRepository;
pub use promotion_log::PromotionLogRepository;
pub use responsibility::ResponsibilityRepository;
pub use responsibility_request::ResponsibilityRequestRepository;
pub use user_activity::UserActivityRepository;
