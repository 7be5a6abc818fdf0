use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromotionBan::Table)
                    .if_not_exists()
                    .col(pk_auto(PromotionBan::Id))
                    .col(string(PromotionBan::GuildId))
                    .col(string(PromotionBan::UserId))
                    .col(text(PromotionBan::Reason))
                    .col(string(PromotionBan::ByUserId))
                    .col(timestamp(PromotionBan::StartTime))
                    .col(timestamp_null(PromotionBan::EndTime))
                    // One ban record per user per guild
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_promotion_ban_unique")
                            .col(PromotionBan::GuildId)
                            .col(PromotionBan::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromotionBan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromotionBan {
    Table,
    Id,
    GuildId,
    UserId,
    Reason,
    ByUserId,
    StartTime,
    EndTime,
}
