use crate::data::left_member::LeftMemberRepository;
use chrono::{TimeDelta, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod restore;
mod snapshot_grants;
