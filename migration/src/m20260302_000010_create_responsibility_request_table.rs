use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResponsibilityRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ResponsibilityRequest::Id))
                    .col(string(ResponsibilityRequest::GuildId))
                    .col(string(ResponsibilityRequest::Kind))
                    .col(integer_null(ResponsibilityRequest::ResponsibilityId))
                    .col(string(ResponsibilityRequest::UserId))
                    .col(string_null(ResponsibilityRequest::SuggestedName))
                    .col(text(ResponsibilityRequest::Content))
                    .col(string(ResponsibilityRequest::Status).default("pending"))
                    .col(string_null(ResponsibilityRequest::ChannelId))
                    .col(string_null(ResponsibilityRequest::MessageId))
                    .col(
                        timestamp(ResponsibilityRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(ResponsibilityRequest::DecidedBy))
                    .col(timestamp_null(ResponsibilityRequest::DecidedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResponsibilityRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResponsibilityRequest {
    Table,
    Id,
    GuildId,
    Kind,
    ResponsibilityId,
    UserId,
    SuggestedName,
    Content,
    Status,
    ChannelId,
    MessageId,
    CreatedAt,
    DecidedBy,
    DecidedAt,
}
