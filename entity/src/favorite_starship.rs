use sea_orm::entity::prelude::*;

/// A user's favorite starship.
///
/// Neither `user_id` nor `starship_id` is a store-level foreign key: favorites may
/// be recorded for ids that do not resolve, and the owning user's favorites are
/// removed by the user repository when the user is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    pub starship_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
