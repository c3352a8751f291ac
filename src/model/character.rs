use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::string_or_number;

/// A character with its homeworld flattened to the planet's name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    /// Name of the home planet, `null` when it cannot be resolved
    pub homeworld: Option<String>,
}

impl From<(entity::character::Model, Option<entity::planet::Model>)> for CharacterDto {
    fn from(
        (character, homeworld): (entity::character::Model, Option<entity::planet::Model>),
    ) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
            homeworld: homeworld.map(|planet| planet.name),
        }
    }
}

/// Descriptive character columns; on update, `None` keeps the stored value
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct CharacterDetailsDto {
    #[serde(default, deserialize_with = "string_or_number")]
    pub hair_color: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub skin_color: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub eye_color: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub birth_year: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub gender: Option<String>,
}

/// Request body for creating a character.
///
/// `weight` is stored in the character's `mass` column.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NewCharacterDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: Option<String>,
    pub homeworld_id: Option<i32>,
    #[serde(flatten)]
    pub details: CharacterDetailsDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterResponseDto {
    pub msg: String,
    pub character: CharacterDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterListResponseDto {
    pub msg: String,
    pub character: Vec<CharacterDto>,
}
