//! Holonet: a REST backend for a relational Star Wars catalog of characters, planets,
//! starships and films, with registered users and their favorites.

pub mod model;
pub mod server;
