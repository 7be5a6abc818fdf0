use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(UserActivity::Id))
                    .col(string(UserActivity::GuildId))
                    .col(string(UserActivity::UserId))
                    .col(big_integer(UserActivity::Messages).default(0))
                    .col(big_integer(UserActivity::VoiceMinutes).default(0))
                    .col(big_integer(UserActivity::Reactions).default(0))
                    .col(
                        timestamp(UserActivity::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_activity_unique")
                            .col(UserActivity::GuildId)
                            .col(UserActivity::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserActivity {
    Table,
    Id,
    GuildId,
    UserId,
    Messages,
    VoiceMinutes,
    Reactions,
    UpdatedAt,
}
