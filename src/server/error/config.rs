//! Configuration errors raised while reading the environment at startup.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration could not be turned into a [`Config`](crate::server::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The variable is set but its value does not parse
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Parser message explaining the rejection
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
