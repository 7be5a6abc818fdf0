use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromotionLog::Table)
                    .if_not_exists()
                    .col(pk_auto(PromotionLog::Id))
                    .col(string(PromotionLog::GuildId))
                    .col(string(PromotionLog::Action))
                    .col(string(PromotionLog::UserId))
                    .col(string_null(PromotionLog::RoleId))
                    .col(string_null(PromotionLog::ByUserId))
                    .col(text(PromotionLog::Details))
                    .col(
                        timestamp(PromotionLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_promotion_log_guild_id")
                    .table(PromotionLog::Table)
                    .col(PromotionLog::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_promotion_log_guild_id")
                    .table(PromotionLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PromotionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromotionLog {
    Table,
    Id,
    GuildId,
    Action,
    UserId,
    RoleId,
    ByUserId,
    Details,
    CreatedAt,
}
