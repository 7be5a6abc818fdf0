//! SeaORM entity definitions for every table owned by the bot.

pub mod prelude;

pub mod admin_application;
pub mod application_cooldown;
pub mod guild_settings;
pub mod left_member_grant;
pub mod promotion_admin_role;
pub mod promotion_ban;
pub mod promotion_grant;
pub mod promotion_log;
pub mod responsibility;
pub mod responsibility_member;
pub mod responsibility_request;
pub mod responsibility_role;
pub mod user_activity;
pub mod user_activity_daily;
