use sea_orm::entity::prelude::*;

/// A user's favorite character.
///
/// Neither `user_id` nor `character_id` is a store-level foreign key: favorites may
/// be recorded for ids that do not resolve, and the owning user's favorites are
/// removed by the user repository when the user is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
