//! 400 errors for request bodies, raised before any lookup or write.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request bodies rejected before any database work is attempted.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Body missing, not JSON, or holding a value of the wrong type
    #[error("Request body must be a JSON object with the expected fields: {0}")]
    MalformedBody(#[from] JsonRejection),
    /// A required field was absent or `null`; the message names it upper-cased
    #[error("The {} field is required", .0.to_uppercase())]
    MissingField(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Returns the value of a required field or the error naming it
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::{require, ValidationError};

    #[test]
    fn missing_field_names_the_field() {
        let result = require::<String>(None, "last_name");

        assert!(matches!(result, Err(ValidationError::MissingField("last_name"))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "The LAST_NAME field is required"
        );
    }

    #[test]
    fn present_field_is_returned() {
        let result = require(Some("Leia".to_string()), "name");

        assert_eq!(result.unwrap(), "Leia");
    }
}
