pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_settings_table;
mod m20260301_000002_create_promotion_admin_role_table;
mod m20260301_000003_create_promotion_grant_table;
mod m20260301_000004_create_promotion_ban_table;
mod m20260301_000005_create_promotion_log_table;
mod m20260301_000006_create_left_member_grant_table;
mod m20260302_000007_create_responsibility_table;
mod m20260302_000008_create_responsibility_member_table;
mod m20260302_000009_create_responsibility_role_table;
mod m20260302_000010_create_responsibility_request_table;
mod m20260303_000011_create_admin_application_table;
mod m20260303_000012_create_application_cooldown_table;
mod m20260304_000013_create_user_activity_table;
mod m20260304_000014_create_user_activity_daily_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_settings_table::Migration),
            Box::new(m20260301_000002_create_promotion_admin_role_table::Migration),
            Box::new(m20260301_000003_create_promotion_grant_table::Migration),
            Box::new(m20260301_000004_create_promotion_ban_table::Migration),
            Box::new(m20260301_000005_create_promotion_log_table::Migration),
            Box::new(m20260301_000006_create_left_member_grant_table::Migration),
            Box::new(m20260302_000007_create_responsibility_table::Migration),
            Box::new(m20260302_000008_create_responsibility_member_table::Migration),
            Box::new(m20260302_000009_create_responsibility_role_table::Migration),
            Box::new(m20260302_000010_create_responsibility_request_table::Migration),
            Box::new(m20260303_000011_create_admin_application_table::Migration),
            Box::new(m20260303_000012_create_application_cooldown_table::Migration),
            Box::new(m20260304_000013_create_user_activity_table::Migration),
            Box::new(m20260304_000014_create_user_activity_daily_table::Migration),
        ]
    }
}
