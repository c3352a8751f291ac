use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Homeworld,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_film::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_film::Relation::Character.def().rev())
    }
}

// Characters pilot starships through `character_starship`
impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_starship::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
