use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationCooldown::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationCooldown::Id))
                    .col(string(ApplicationCooldown::GuildId))
                    .col(string(ApplicationCooldown::CandidateId))
                    .col(string(ApplicationCooldown::RejectedBy))
                    .col(text(ApplicationCooldown::Reason))
                    .col(timestamp(ApplicationCooldown::Until))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_application_cooldown_unique")
                            .col(ApplicationCooldown::GuildId)
                            .col(ApplicationCooldown::CandidateId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationCooldown::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationCooldown {
    Table,
    Id,
    GuildId,
    CandidateId,
    RejectedBy,
    Reason,
    Until,
}
