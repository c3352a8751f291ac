//! Film endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        film::{FilmListResponseDto, FilmResponseDto},
    },
    server::{error::Error, model::app::AppState, service::film::FilmService},
};

/// OpenAPI tag grouping the film endpoints
pub static FILM_TAG: &str = "film";

/// List every film
#[utoipa::path(
    get,
    path = "/films",
    tag = FILM_TAG,
    responses(
        (status = 200, description = "Success when listing films", body = FilmListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_films(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let films = FilmService::new(&state.db).get_films().await?;

    Ok((
        StatusCode::OK,
        Json(FilmListResponseDto {
            msg: OK_MSG.to_string(),
            film: films,
        }),
    ))
}

/// Get a single film by ID
#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = FILM_TAG,
    params(("id" = i32, Path, description = "ID of the film")),
    responses(
        (status = 200, description = "Success when retrieving film", body = FilmResponseDto),
        (status = 404, description = "Film not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let film = FilmService::new(&state.db).get_film(id).await?;

    Ok((
        StatusCode::OK,
        Json(FilmResponseDto {
            msg: OK_MSG.to_string(),
            film,
        }),
    ))
}
