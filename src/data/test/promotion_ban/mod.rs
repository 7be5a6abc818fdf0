use crate::{data::promotion_ban::PromotionBanRepository, model::promotion::NewPromotionBan};
use chrono::{TimeDelta, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_expired;
