use crate::data::application_cooldown::ApplicationCooldownRepository;
use chrono::{TimeDelta, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_expired;
mod find_active;
mod upsert;
