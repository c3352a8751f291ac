pub use super::character::Entity as Character;
pub use super::character_film::Entity as CharacterFilm;
pub use super::character_starship::Entity as CharacterStarship;
pub use super::favorite_character::Entity as FavoriteCharacter;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_starship::Entity as FavoriteStarship;
pub use super::film::Entity as Film;
pub use super::planet::Entity as Planet;
pub use super::planet_film::Entity as PlanetFilm;
pub use super::starship::Entity as Starship;
pub use super::starship_film::Entity as StarshipFilm;
pub use super::user::Entity as User;
