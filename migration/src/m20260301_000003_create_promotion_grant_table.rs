use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromotionGrant::Table)
                    .if_not_exists()
                    .col(pk_auto(PromotionGrant::Id))
                    .col(string(PromotionGrant::GuildId))
                    .col(string(PromotionGrant::UserId))
                    .col(string(PromotionGrant::RoleId))
                    .col(text(PromotionGrant::Reason))
                    .col(string(PromotionGrant::ByUserId))
                    .col(timestamp(PromotionGrant::StartTime))
                    .col(timestamp_null(PromotionGrant::EndTime))
                    .col(string(PromotionGrant::Duration))
                    .col(string(PromotionGrant::Status).default("active"))
                    .col(text_null(PromotionGrant::UserStatsSnapshot))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_promotion_grant_unique")
                            .col(PromotionGrant::GuildId)
                            .col(PromotionGrant::UserId)
                            .col(PromotionGrant::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        // Expiry poller scans by end_time
        manager
            .create_index(
                Index::create()
                    .name("idx_promotion_grant_end_time")
                    .table(PromotionGrant::Table)
                    .col(PromotionGrant::EndTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_promotion_grant_end_time")
                    .table(PromotionGrant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PromotionGrant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromotionGrant {
    Table,
    Id,
    GuildId,
    UserId,
    RoleId,
    Reason,
    ByUserId,
    StartTime,
    EndTime,
    Duration,
    Status,
    UserStatsSnapshot,
}
