use crate::{
    data::user_activity::UserActivityRepository, model::stats::ActivityKind, util::time::day_key,
};
use chrono::{TimeDelta, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_stats;
mod increment;
