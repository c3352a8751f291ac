//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /user`, `POST /user`, `GET /user/{id}`
/// - `GET /users/{id}/favorites`
/// - `POST /favorite/{user_id}/planet/{planet_id}`
/// - `POST /favorite/{user_id}/character/{character_id}`
/// - `POST /favorite/{user_id}/starship/{starship_id}`
/// - `GET /characters`, `GET /characters/{id}`, `POST /character`
/// - `GET /planets`, `GET /planets/{id}`, `POST /planet`, `PUT /planet/{id}`
/// - `GET /starships`, `GET /starships/{id}`
/// - `GET /films`, `GET /films/{id}`
///
/// # Returns
/// An Axum `Router<AppState>`; call `with_state` before serving.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship API routes"),
        (name = controller::film::FILM_TAG, description = "Film API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users, controller::user::create_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::create_favorite_planet))
        .routes(routes!(controller::favorite::create_favorite_character))
        .routes(routes!(controller::favorite::create_favorite_starship))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::character::create_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::create_planet))
        .routes(routes!(controller::planet::update_planet))
        .routes(routes!(controller::starship::get_starships))
        .routes(routes!(controller::starship::get_starship))
        .routes(routes!(controller::film::get_films))
        .routes(routes!(controller::film::get_film))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
