use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub diameter: Option<String>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub population: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Characters whose homeworld is this planet
    #[sea_orm(has_many = "super::character::Entity")]
    Residents,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Residents.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::planet_film::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::planet_film::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
