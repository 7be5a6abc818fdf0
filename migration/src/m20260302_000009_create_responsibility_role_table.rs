use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000007_create_responsibility_table::Responsibility;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResponsibilityRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ResponsibilityRole::Id))
                    .col(integer(ResponsibilityRole::ResponsibilityId))
                    .col(string(ResponsibilityRole::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_responsibility_role_responsibility_id")
                            .from(
                                ResponsibilityRole::Table,
                                ResponsibilityRole::ResponsibilityId,
                            )
                            .to(Responsibility::Table, Responsibility::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_responsibility_role_unique")
                            .col(ResponsibilityRole::ResponsibilityId)
                            .col(ResponsibilityRole::RoleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResponsibilityRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResponsibilityRole {
    Table,
    Id,
    ResponsibilityId,
    RoleId,
}
