use crate::data::admin_role::AdminRoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
