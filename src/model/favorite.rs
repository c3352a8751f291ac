//! A created favorite embeds its fully serialized target instead of the raw id, while a
//! user's favorites listing holds the serialized targets alone.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto, starship::StarshipDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    /// `null` when the favorited character no longer exists
    pub character: Option<CharacterDto>,
}

impl
    From<(
        entity::favorite_character::Model,
        Option<(entity::character::Model, Option<entity::planet::Model>)>,
    )> for FavoriteCharacterDto
{
    fn from(
        (favorite, character): (
            entity::favorite_character::Model,
            Option<(entity::character::Model, Option<entity::planet::Model>)>,
        ),
    ) -> Self {
        Self {
            id: favorite.id,
            character: character.map(CharacterDto::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    /// `null` when the favorited planet no longer exists
    pub planet: Option<PlanetDto>,
}

impl From<(entity::favorite_planet::Model, Option<entity::planet::Model>)> for FavoritePlanetDto {
    fn from(
        (favorite, planet): (entity::favorite_planet::Model, Option<entity::planet::Model>),
    ) -> Self {
        Self {
            id: favorite.id,
            planet: planet.map(PlanetDto::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStarshipDto {
    pub id: i32,
    /// `null` when the favorited starship no longer exists
    pub starship: Option<StarshipDto>,
}

impl From<(entity::favorite_starship::Model, Option<entity::starship::Model>)>
    for FavoriteStarshipDto
{
    fn from(
        (favorite, starship): (
            entity::favorite_starship::Model,
            Option<entity::starship::Model>,
        ),
    ) -> Self {
        Self {
            id: favorite.id,
            starship: starship.map(StarshipDto::from),
        }
    }
}

/// The records a user has favorited, grouped by type
///
/// Each entry is the serialized record itself. Favorites whose record no longer exists
/// are left out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorite_characters: Vec<CharacterDto>,
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_starships: Vec<StarshipDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesResponseDto {
    pub msg: String,
    #[serde(flatten)]
    pub favorites: UserFavoritesDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterResponseDto {
    pub msg: String,
    pub favorite: FavoriteCharacterDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetResponseDto {
    pub msg: String,
    pub favorite: FavoritePlanetDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteStarshipResponseDto {
    pub msg: String,
    pub favorite: FavoriteStarshipDto,
}
