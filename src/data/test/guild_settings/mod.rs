use crate::{
    data::guild_settings::GuildSettingsRepository,
    model::settings::{SettingsChannel, SettingsUpdate, DEFAULT_APPLICATION_COOLDOWN_HOURS},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod update;
