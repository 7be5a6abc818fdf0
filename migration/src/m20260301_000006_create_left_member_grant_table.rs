use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeftMemberGrant::Table)
                    .if_not_exists()
                    .col(pk_auto(LeftMemberGrant::Id))
                    .col(string(LeftMemberGrant::GuildId))
                    .col(string(LeftMemberGrant::UserId))
                    .col(string(LeftMemberGrant::RoleId))
                    .col(text(LeftMemberGrant::Reason))
                    .col(string(LeftMemberGrant::ByUserId))
                    .col(timestamp(LeftMemberGrant::StartTime))
                    .col(timestamp_null(LeftMemberGrant::EndTime))
                    .col(string(LeftMemberGrant::Duration))
                    .col(text_null(LeftMemberGrant::UserStatsSnapshot))
                    .col(timestamp(LeftMemberGrant::LeftAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_left_member_grant_member")
                    .table(LeftMemberGrant::Table)
                    .col(LeftMemberGrant::GuildId)
                    .col(LeftMemberGrant::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_left_member_grant_member")
                    .table(LeftMemberGrant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeftMemberGrant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeftMemberGrant {
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
    UserStatsSnapshot,
    LeftAt,
}
