use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Responsibility::Table)
                    .if_not_exists()
                    .col(pk_auto(Responsibility::Id))
                    .col(string(Responsibility::GuildId))
                    .col(string(Responsibility::Name))
                    .col(text(Responsibility::Description).default(""))
                    .col(integer(Responsibility::SortOrder).default(0))
                    .col(string_null(Responsibility::ImageUrl))
                    .col(string_null(Responsibility::MentionShortcut))
                    .col(
                        timestamp(Responsibility::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_responsibility_guild_name")
                            .col(Responsibility::GuildId)
                            .col(Responsibility::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Responsibility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Responsibility {
    Table,
    Id,
    GuildId,
    Name,
    Description,
    SortOrder,
    ImageUrl,
    MentionShortcut,
    CreatedAt,
}
