use crate::{data::admin_application::AdminApplicationRepository, model::stats::UserStats};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
