use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserActivityDaily::Table)
                    .if_not_exists()
                    .col(pk_auto(UserActivityDaily::Id))
                    .col(string(UserActivityDaily::GuildId))
                    .col(string(UserActivityDaily::UserId))
                    .col(string(UserActivityDaily::Day))
                    .col(big_integer(UserActivityDaily::Messages).default(0))
                    .col(big_integer(UserActivityDaily::VoiceMinutes).default(0))
                    .col(big_integer(UserActivityDaily::Reactions).default(0))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_activity_daily_unique")
                            .col(UserActivityDaily::GuildId)
                            .col(UserActivityDaily::UserId)
                            .col(UserActivityDaily::Day),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivityDaily::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserActivityDaily {
    Table,
    Id,
    GuildId,
    UserId,
    Day,
    Messages,
    VoiceMinutes,
    Reactions,
}
