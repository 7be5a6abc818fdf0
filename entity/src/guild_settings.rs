use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub log_channel_id: Option<String>,
    pub applications_channel_id: Option<String>,
    pub responsibilities_channel_id: Option<String>,
    pub suggestions_channel_id: Option<String>,
    pub application_cooldown_hours: i32,
    pub replace_previous_role: bool,
    pub dm_notifications: bool,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
