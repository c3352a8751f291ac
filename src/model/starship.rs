use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::string_or_number;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
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
    #[serde(rename = "MGLT")]
    pub mglt: Option<String>,
    pub starship_class: Option<String>,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            manufacturer: starship.manufacturer,
            cost_in_credits: starship.cost_in_credits,
            length: starship.length,
            max_atmosphering_speed: starship.max_atmosphering_speed,
            crew: starship.crew,
            passengers: starship.passengers,
            cargo_capacity: starship.cargo_capacity,
            consumables: starship.consumables,
            hyperdrive_rating: starship.hyperdrive_rating,
            mglt: starship.mglt,
            starship_class: starship.starship_class,
        }
    }
}

/// Descriptive starship columns; on update, `None` keeps the stored value
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct StarshipDetailsDto {
    #[serde(default, deserialize_with = "string_or_number")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cost_in_credits: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub max_atmosphering_speed: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub crew: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub passengers: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cargo_capacity: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub consumables: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT", default, deserialize_with = "string_or_number")]
    pub mglt: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub starship_class: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StarshipResponseDto {
    pub msg: String,
    pub starship: StarshipDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StarshipListResponseDto {
    pub msg: String,
    pub starship: Vec<StarshipDto>,
}
