use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "route_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub url: Option<String>,
    #[sea_orm(indexed)]
    pub route_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
