use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminApplication::Table)
                    .if_not_exists()
                    .col(string(AdminApplication::Id).primary_key())
                    .col(string(AdminApplication::GuildId))
                    .col(string(AdminApplication::CandidateId))
                    .col(string(AdminApplication::RequesterId))
                    .col(
                        timestamp(AdminApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text_null(AdminApplication::UserStatsSnapshot))
                    .col(string_null(AdminApplication::ChannelId))
                    .col(string_null(AdminApplication::MessageId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminApplication {
    Table,
    Id,
    GuildId,
    CandidateId,
    RequesterId,
    CreatedAt,
    UserStatsSnapshot,
    ChannelId,
    MessageId,
}
