use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_film::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_film::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_film::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_film::Relation::Film.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_film::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_film::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
