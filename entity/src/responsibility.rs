use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "responsibility")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    pub description: String,
    pub sort_order: i32,
    pub image_url: Option<String>,
    pub mention_shortcut: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::responsibility_member::Entity")]
    ResponsibilityMember,
    #[sea_orm(has_many = "super::responsibility_role::Entity")]
    ResponsibilityRole,
}

impl Related<super::responsibility_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponsibilityMember.def()
    }
}

impl Related<super::responsibility_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponsibilityRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
