//! Starship endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        starship::{StarshipListResponseDto, StarshipResponseDto},
    },
    server::{error::Error, model::app::AppState, service::starship::StarshipService},
};

/// OpenAPI tag grouping the starship endpoints
pub static STARSHIP_TAG: &str = "starship";

/// List every starship
#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "Success when listing starships", body = StarshipListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starships = StarshipService::new(&state.db).get_starships().await?;

    Ok((
        StatusCode::OK,
        Json(StarshipListResponseDto {
            msg: OK_MSG.to_string(),
            starship: starships,
        }),
    ))
}

/// Get a single starship by ID
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "ID of the starship")),
    responses(
        (status = 200, description = "Success when retrieving starship", body = StarshipResponseDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let starship = StarshipService::new(&state.db).get_starship(id).await?;

    Ok((
        StatusCode::OK,
        Json(StarshipResponseDto {
            msg: OK_MSG.to_string(),
            starship,
        }),
    ))
}
