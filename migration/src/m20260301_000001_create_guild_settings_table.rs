use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(string(GuildSettings::GuildId).primary_key())
                    .col(string_null(GuildSettings::LogChannelId))
                    .col(string_null(GuildSettings::ApplicationsChannelId))
                    .col(string_null(GuildSettings::ResponsibilitiesChannelId))
                    .col(string_null(GuildSettings::SuggestionsChannelId))
                    .col(integer(GuildSettings::ApplicationCooldownHours).default(72))
                    .col(boolean(GuildSettings::ReplacePreviousRole).default(true))
                    .col(boolean(GuildSettings::DmNotifications).default(true))
                    .col(
                        timestamp(GuildSettings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    GuildId,
    LogChannelId,
    ApplicationsChannelId,
    ResponsibilitiesChannelId,
    SuggestionsChannelId,
    ApplicationCooldownHours,
    ReplacePreviousRole,
    DmNotifications,
    UpdatedAt,
}
