//! HTTP controller endpoints for the holonet API.
//!
//! Axum handlers for users, the catalog (characters, planets, starships, films) and
//! favorites. Controllers extract path and body input, turn body rejections into
//! validation errors, delegate to the services and wrap results in the `{"msg": "OK", ...}`
//! envelope. Every handler is annotated for utoipa's OpenAPI generation.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod starship;
pub mod user;
