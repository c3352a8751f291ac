//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, the
//! response envelope and error mapping for every API endpoint.

mod character;
mod favorite;
mod planet;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::server::model::app::AppState;
use holonet_test_utils::prelude::*;

use crate::util::body_json;
