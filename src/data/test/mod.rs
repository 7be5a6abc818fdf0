mod admin_application;
mod admin_role;
mod application_cooldown;
mod guild_settings;
mod left_member;
mod promotion_ban;
mod promotion_grant;
mod promotion_log;
mod responsibility;
mod responsibility_request;
mod user_activity;
