use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "responsibility_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub responsibility_id: i32,
    pub role_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::responsibility::Entity",
        from = "Column::ResponsibilityId",
        to = "super::responsibility::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Responsibility,
}

impl Related<super::responsibility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responsibility.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
