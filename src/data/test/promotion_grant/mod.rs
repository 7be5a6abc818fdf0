use crate::{
    data::promotion_grant::PromotionGrantRepository,
    model::{duration::PromotionDuration, promotion::NewPromotionGrant, stats::UserStats},
};
use chrono::{TimeDelta, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guild;
mod get_expired;
mod update_duration;
