//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories. They enforce the
//! required-field policy for create operations, turn missing records into
//! [`NotFoundError`](crate::server::error::not_found::NotFoundError)s and convert entity
//! models into the DTOs returned by the API.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod starship;
pub mod user;
