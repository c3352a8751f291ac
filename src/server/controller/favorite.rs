//! Favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        favorite::{
            FavoriteCharacterResponseDto, FavoritePlanetResponseDto, FavoriteStarshipResponseDto,
            UserFavoritesResponseDto,
        },
    },
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

/// OpenAPI tag grouping the favorite endpoints
pub static FAVORITE_TAG: &str = "favorite";

/// Get every favorite of a user
///
/// Each entry embeds the favorited record, or `null` if that record does not exist.
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = UserFavoritesResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserFavoritesResponseDto {
            msg: OK_MSG.to_string(),
            favorites,
        }),
    ))
}

/// Favorite a planet
///
/// The user and planet IDs are recorded as given, neither is required to exist.
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoritePlanetResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .create_favorite_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoritePlanetResponseDto {
            msg: OK_MSG.to_string(),
            favorite,
        }),
    ))
}

/// Favorite a character
///
/// The user and character IDs are recorded as given, neither is required to exist.
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteCharacterResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .create_favorite_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCharacterResponseDto {
            msg: OK_MSG.to_string(),
            favorite,
        }),
    ))
}

/// Favorite a starship
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/starship/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteStarshipResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite_starship(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .create_favorite_starship(user_id, starship_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteStarshipResponseDto {
            msg: OK_MSG.to_string(),
            favorite,
        }),
    ))
}
