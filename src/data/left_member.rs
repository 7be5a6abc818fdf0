//! Left-member snapshot repository.
//!
//! When a member with active grants leaves, their grant rows move into
//! `left_member_grant`; on rejoin each row is either moved back or discarded. Moves run
//! inside a transaction so a grant is never in both tables or in neither. Rows whose role
//! could not be re-added stay in the snapshot until the member rejoins again.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    data::promotion_grant::insert_grant,
    model::promotion::{LeftMemberGrant, NewPromotionGrant, PromotionGrant},
};

pub struct LeftMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeftMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves all of a member's active grants into the left-member snapshot.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member left
    /// - `user_id` - Member who left
    /// - `left_at` - When the member left
    ///
    /// # Returns
    /// - `Ok(Vec<PromotionGrant>)` - The grants that were moved (empty if none)
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn snapshot_grants(
        &self,
        guild_id: u64,
        user_id: u64,
        left_at: DateTime<Utc>,
    ) -> Result<Vec<PromotionGrant>, DbErr> {
        let txn = self.db.begin().await?;

        let entities = entity::prelude::PromotionGrant::find()
            .filter(entity::promotion_grant::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::promotion_grant::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::promotion_grant::Column::StartTime)
            .all(&txn)
            .await?;

        let mut moved = Vec::with_capacity(entities.len());
        for grant in entities {
            entity::left_member_grant::ActiveModel {
                guild_id: ActiveValue::Set(grant.guild_id.clone()),
                user_id: ActiveValue::Set(grant.user_id.clone()),
                role_id: ActiveValue::Set(grant.role_id.clone()),
                reason: ActiveValue::Set(grant.reason.clone()),
                by_user_id: ActiveValue::Set(grant.by_user_id.clone()),
                start_time: ActiveValue::Set(grant.start_time),
                end_time: ActiveValue::Set(grant.end_time),
                duration: ActiveValue::Set(grant.duration.clone()),
                user_stats_snapshot: ActiveValue::Set(grant.user_stats_snapshot.clone()),
                left_at: ActiveValue::Set(left_at),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            entity::prelude::PromotionGrant::delete_by_id(grant.id)
                .exec(&txn)
                .await?;

            moved.push(PromotionGrant::from_entity(grant)?);
        }

        txn.commit().await?;

        Ok(moved)
    }

    /// Reads a member's snapshot without removing it.
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<Vec<LeftMemberGrant>, DbErr> {
        entity::prelude::LeftMemberGrant::find()
            .filter(entity::left_member_grant::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::left_member_grant::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::left_member_grant::Column::StartTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(LeftMemberGrant::from_entity)
            .collect()
    }

    /// Moves one snapshotted grant back into the active grants.
    ///
    /// # Returns
    /// - `Ok(PromotionGrant)` - The re-inserted grant, with its original start and end times
    /// - `Err(DbErr)` - Database error; the transaction is rolled back and the row stays
    pub async fn restore(&self, left: &LeftMemberGrant) -> Result<PromotionGrant, DbErr> {
        let txn = self.db.begin().await?;

        let grant = insert_grant(&txn, NewPromotionGrant::from(left)).await?;
        entity::prelude::LeftMemberGrant::delete_by_id(left.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(grant)
    }

    /// Deletes one snapshotted grant without restoring it.
    pub async fn discard(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::LeftMemberGrant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
