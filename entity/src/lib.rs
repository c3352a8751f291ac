//! SeaORM entities for the holonet catalog.
//!
//! Every table used by the service is described here, including the
//! many-to-many association tables and the per-user favorites. The entities
//! carry no behaviour besides their relations so that any tool reading the
//! schema (the HTTP server, migrations, an admin panel) sees the same model.

pub mod prelude;

pub mod character;
pub mod character_film;
pub mod character_starship;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_starship;
pub mod film;
pub mod planet;
pub mod planet_film;
pub mod starship;
pub mod starship_film;
pub mod user;
