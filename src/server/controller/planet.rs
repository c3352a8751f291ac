//! Planet endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        planet::{PlanetFieldsDto, PlanetListResponseDto, PlanetResponseDto, PlanetUpdateDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag grouping the planet endpoints
pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = PlanetListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((
        StatusCode::OK,
        Json(PlanetListResponseDto {
            msg: OK_MSG.to_string(),
            planet: planets,
        }),
    ))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetResponseDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_planet(id).await?;

    Ok((
        StatusCode::OK,
        Json(PlanetResponseDto {
            msg: OK_MSG.to_string(),
            planet,
        }),
    ))
}

/// Create a planet, only `name` is required
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = PlanetFieldsDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetResponseDto),
        (status = 400, description = "Malformed body or missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<PlanetFieldsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(fields) = payload.map_err(ValidationError::from)?;

    let planet = PlanetService::new(&state.db).create_planet(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanetResponseDto {
            msg: OK_MSG.to_string(),
            planet,
        }),
    ))
}

/// Rename a planet
///
/// Only `name` is applied, other keys in the body are ignored.
#[utoipa::path(
    put,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    request_body = PlanetUpdateDto,
    responses(
        (status = 200, description = "Planet updated", body = PlanetResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<PlanetUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(update) = payload.map_err(ValidationError::from)?;

    let planet = PlanetService::new(&state.db)
        .update_planet(id, update)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlanetResponseDto {
            msg: OK_MSG.to_string(),
            planet,
        }),
    ))
}
