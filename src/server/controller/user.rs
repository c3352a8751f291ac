//! User endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        user::{NewUserDto, UserListResponseDto, UserResponseDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping the user endpoints
pub static USER_TAG: &str = "user";

/// List every registered user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = UserListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((
        StatusCode::OK,
        Json(UserListResponseDto {
            msg: OK_MSG.to_string(),
            user: users,
        }),
    ))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            msg: OK_MSG.to_string(),
            user,
        }),
    ))
}

/// Register a new user
///
/// All of `name`, `last_name`, `password` and `email` are required. The password is
/// never included in the response.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponseDto),
        (status = 400, description = "Malformed body or missing required field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_user) = payload.map_err(ValidationError::from)?;

    let user = UserService::new(&state.db).create_user(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponseDto {
            msg: OK_MSG.to_string(),
            user,
        }),
    ))
}
