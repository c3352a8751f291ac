//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the server, so signatures don't need to spell out the `entity` crate paths.

/// Registered user; the `password` column is never serialized (see [`crate::model::user::UserDto`]).
pub type UserModel = entity::user::Model;

/// Character of the catalog, belongs to exactly one homeworld planet.
pub type CharacterModel = entity::character::Model;

/// Planet of the catalog.
pub type PlanetModel = entity::planet::Model;

/// Starship of the catalog.
pub type StarshipModel = entity::starship::Model;

/// Film of the catalog.
pub type FilmModel = entity::film::Model;

/// A user's favorite character.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// A user's favorite planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// A user's favorite starship.
pub type FavoriteStarshipModel = entity::favorite_starship::Model;

/// Character joined with its homeworld, `None` if the planet row is missing.
pub type CharacterWithHomeworld = (CharacterModel, Option<PlanetModel>);
