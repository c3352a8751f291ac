//! 404 errors for ids that match no row.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request addressed an id with no matching row.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// No user has the given ID
    #[error("User with ID {0} does not exist")]
    User(i32),
    /// No character has the given ID
    #[error("Character with ID {0} does not exist")]
    Character(i32),
    /// No planet has the given ID
    #[error("Planet with ID {0} does not exist")]
    Planet(i32),
    /// No starship has the given ID
    #[error("Starship with ID {0} does not exist")]
    Starship(i32),
    /// No film has the given ID
    #[error("Film with ID {0} does not exist")]
    Film(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("Not found: {}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
