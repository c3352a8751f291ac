//! Serialized representations of the catalog.
//!
//! Every entity has a DTO built from already-loaded models through a pure `From`
//! conversion; nothing here touches the database. Request DTOs keep each field
//! optional so that missing values surface as validation errors naming the field
//! instead of deserialization failures.

pub mod api;
pub mod character;
pub mod favorite;
pub mod field;
pub mod film;
pub mod planet;
pub mod starship;
pub mod user;
