//! Error types for the holonet server application.
//!
//! The taxonomy has three caller-visible kinds: validation failures (400), missing
//! records (404) and everything else, which is converted into a uniform error envelope
//! by the [`IntoResponse`] implementation on [`Error`]. All error types use `thiserror`.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the holonet server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so handlers can use the `?` operator throughout.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request body malformed or missing a required field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The addressed record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The write would break a uniqueness guarantee (e.g. a user email already in use).
    #[error("{0}")]
    Conflict(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed body or missing required field
/// - 404 Not Found - Referenced record does not exist
/// - 409 Conflict - Uniqueness constraint violated
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::Conflict(msg) => conflict_response(msg),
            Self::DbErr(err) if is_unique_violation(&err) => {
                conflict_response("Record conflicts with an existing record".to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Returns true when the database rejected a write because of a UNIQUE constraint
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn conflict_response(msg: String) -> Response {
    tracing::debug!("Conflict: {}", msg);

    (StatusCode::CONFLICT, Json(ErrorDto { msg })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
