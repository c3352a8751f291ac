use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub hyperdrive_rating: Option<String>,
    #[sea_orm(column_name = "MGLT")]
    pub mglt: Option<String>,
    pub starship_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_starship::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_starship::Relation::Starship.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_film::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_film::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
