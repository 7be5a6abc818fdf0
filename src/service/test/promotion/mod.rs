use chrono::{TimeDelta, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::{
    data::{LeftMemberRepository, PromotionGrantRepository, PromotionLogRepository},
    error::{promotion::PromotionError, AppError},
    model::{
        duration::PromotionDuration,
        log::LogAction,
        promotion::{AddBanParam, CreatePromotionParam, EndPromotionParam},
    },
    service::{guard::RoleChangeGuard, promotion::PromotionService},
};

mod ban;
mod create;
mod expire;
mod member;
mod modify;
mod status;

/// Allow-lists the admin and junior admin roles of the standard guild.
async fn allow_admin_roles(db: &DatabaseConnection) -> Result<(), DbErr> {
    factory::create_admin_role(db, &guild_str(), &ADMIN_ROLE.to_string()).await?;
    factory::create_admin_role(db, &guild_str(), &JUNIOR_ROLE.to_string()).await?;
    Ok(())
}

fn service<'a>(
    db: &'a DatabaseConnection,
    fake: &Arc<FakeGateway>,
    guard: &RoleChangeGuard,
) -> PromotionService<'a> {
    PromotionService::new(db, fake.clone(), guard.clone())
}

fn grant_param(granter_id: u64, duration: PromotionDuration) -> CreatePromotionParam {
    CreatePromotionParam {
        guild_id: GUILD,
        target_id: TARGET,
        role_id: ADMIN_ROLE,
        granter_id,
        duration,
        reason: "Helps with moderation".to_string(),
    }
}

/// Actions in the guild's audit log, newest first.
async fn logged_actions(db: &DatabaseConnection) -> Result<Vec<LogAction>, DbErr> {
    Ok(PromotionLogRepository::new(db)
        .get_recent(GUILD, 50)
        .await?
        .into_iter()
        .map(|e| e.action)
        .collect())
}
