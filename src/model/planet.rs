use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::string_or_number;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
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

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            diameter: planet.diameter,
            climate: planet.climate,
            gravity: planet.gravity,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            population: planet.population,
        }
    }
}

/// Descriptive planet columns; on update, `None` keeps the stored value
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct PlanetDetailsDto {
    #[serde(default, deserialize_with = "string_or_number")]
    pub rotation_period: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub orbital_period: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub diameter: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub climate: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub gravity: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub terrain: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub surface_water: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub population: Option<String>,
}

/// Request body for creating a planet, only `name` is required
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct PlanetFieldsDto {
    pub name: Option<String>,
    #[serde(flatten)]
    pub details: PlanetDetailsDto,
}

/// Request body for updating a planet
///
/// Only the name can be changed over the API, other keys in the body are ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct PlanetUpdateDto {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetResponseDto {
    pub msg: String,
    pub planet: PlanetDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetListResponseDto {
    pub msg: String,
    pub planet: Vec<PlanetDto>,
}
