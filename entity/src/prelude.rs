pub use super::admin_application::Entity as AdminApplication;
pub use super::application_cooldown::Entity as ApplicationCooldown;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::left_member_grant::Entity as LeftMemberGrant;
pub use super::promotion_admin_role::Entity as PromotionAdminRole;
pub use super::promotion_ban::Entity as PromotionBan;
pub use super::promotion_grant::Entity as PromotionGrant;
pub use super::promotion_log::Entity as PromotionLog;
pub use super::responsibility::Entity as Responsibility;
pub use super::responsibility_member::Entity as ResponsibilityMember;
pub use super::responsibility_request::Entity as ResponsibilityRequest;
pub use super::responsibility_role::Entity as ResponsibilityRole;
pub use super::user_activity::Entity as UserActivity;
pub use super::user_activity_daily::Entity as UserActivityDaily;
