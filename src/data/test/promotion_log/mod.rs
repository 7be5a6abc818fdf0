use crate::{
    data::promotion_log::PromotionLogRepository,
    model::log::{LogAction, NewLogEntry},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use test_utils::builder::TestBuilder;

mod append;
mod get_recent;
mod trim;

fn entry(guild_id: u64, user_id: u64, action: LogAction) -> NewLogEntry {
    NewLogEntry {
        guild_id,
        action,
        user_id,
        role_id: Some(100),
        by_user_id: None,
        details: format!("{} for {}", action.as_str(), user_id),
    }
}
