//! Character endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        character::{CharacterListResponseDto, CharacterResponseDto, NewCharacterDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag grouping the character endpoints
pub static CHARACTER_TAG: &str = "character";

/// List every character with its homeworld name
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = CharacterListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    Ok((
        StatusCode::OK,
        Json(CharacterListResponseDto {
            msg: OK_MSG.to_string(),
            character: characters,
        }),
    ))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterResponseDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).get_character(id).await?;

    Ok((
        StatusCode::OK,
        Json(CharacterResponseDto {
            msg: OK_MSG.to_string(),
            character,
        }),
    ))
}

/// Create a character
///
/// `name`, `height`, `weight` and `homeworld_id` are required; `weight` is stored as the
/// character's mass.
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterResponseDto),
        (status = 400, description = "Malformed body or missing required field (name, height, weight or homeworld_id)", body = ErrorDto),
        (status = 404, description = "Homeworld planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<NewCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_character) = payload.map_err(ValidationError::from)?;

    let character = CharacterService::new(&state.db)
        .create_character(new_character)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CharacterResponseDto {
            msg: OK_MSG.to_string(),
            character,
        }),
    ))
}
