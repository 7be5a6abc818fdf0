use crate::{data::responsibility::ResponsibilityRepository, model::responsibility::ResponsibilityUpdate};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod find_by_shortcut;
mod list;
mod members;
mod update;
