use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned alongside every successful response body
pub static OK_MSG: &str = "OK";

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}
