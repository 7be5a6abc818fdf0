use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromotionAdminRole::Table)
                    .if_not_exists()
                    .col(pk_auto(PromotionAdminRole::Id))
                    .col(string(PromotionAdminRole::GuildId))
                    .col(string(PromotionAdminRole::RoleId))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_promotion_admin_role_unique")
                            .col(PromotionAdminRole::GuildId)
                            .col(PromotionAdminRole::RoleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromotionAdminRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromotionAdminRole {
    Table,
    Id,
    GuildId,
    RoleId,
}
