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
                    .table(ResponsibilityMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ResponsibilityMember::Id))
                    .col(integer(ResponsibilityMember::ResponsibilityId))
                    .col(string(ResponsibilityMember::UserId))
                    .col(
                        timestamp(ResponsibilityMember::AddedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_responsibility_member_responsibility_id")
                            .from(
                                ResponsibilityMember::Table,
                                ResponsibilityMember::ResponsibilityId,
                            )
                            .to(Responsibility::Table, Responsibility::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_responsibility_member_unique")
                            .col(ResponsibilityMember::ResponsibilityId)
                            .col(ResponsibilityMember::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResponsibilityMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResponsibilityMember {
    Table,
    Id,
    ResponsibilityId,
    UserId,
    AddedAt,
}
