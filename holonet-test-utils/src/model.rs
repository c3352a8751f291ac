//! Database model type aliases for test utilities.
//!
//! Mirrors the aliases used by the server so fixtures and factories read the same
//! way as the code under test.

pub type UserModel = entity::user::Model;
pub type CharacterModel = entity::character::Model;
pub type PlanetModel = entity::planet::Model;
pub type StarshipModel = entity::starship::Model;
pub type FilmModel = entity::film::Model;
pub type FavoriteCharacterModel = entity::favorite_character::Model;
pub type FavoritePlanetModel = entity::favorite_planet::Model;
pub type FavoriteStarshipModel = entity::favorite_starship::Model;
