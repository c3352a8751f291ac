//! End-to-end request tests through the full router.

use axum::{http::StatusCode, Router};
use holonet::server::{model::app::AppState, router::routes};
use holonet_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, empty_request, json_request};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

/// Expect 201 with the created user and no password key
#[tokio::test]
async fn post_user_returns_created_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let body = json!({
        "name": "Leia",
        "last_name": "Organa",
        "password": "x",
        "email": "leia@rebels.org"
    });
    let resp = app(&test)
        .oneshot(json_request("POST", "/user", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["email"], "leia@rebels.org");
    assert!(body["user"].get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn get_missing_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test)
        .oneshot(empty_request("GET", "/user/9999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["msg"].as_str().unwrap().contains("9999"));

    Ok(())
}

/// Expect a favorite planet created over HTTP to be listed as the serialized planet
#[tokio::test]
async fn favorite_planet_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .with_mock_planet("Yavin IV")
        .with_mock_planet("Hoth")
        .with_mock_planet("Dagobah")
        .with_mock_user("leia@rebels.org")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(empty_request("POST", "/favorite/1/planet/5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(empty_request("GET", "/users/1/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let favorite_planets = body["favorite_planets"].as_array().unwrap();
    assert_eq!(favorite_planets.len(), 1);
    assert_eq!(favorite_planets[0]["id"], 5);
    assert_eq!(favorite_planets[0]["name"], "Dagobah");
    assert!(favorite_planets[0].get("planet").is_none());

    Ok(())
}

/// Expect a body that is not JSON to be rejected with 400 before any lookup
#[tokio::test]
async fn malformed_body_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let req = axum::http::Request::builder()
        .method("PUT")
        .uri("/planet/9")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["msg"].is_string());

    Ok(())
}

/// Expect a planet update to apply only the name and leave descriptive fields alone
#[tokio::test]
async fn put_planet_ignores_descriptive_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let body = json!({ "climate": "CHANGED" });
    let resp = app(&test)
        .oneshot(json_request("PUT", "/planet/1", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["planet"]["name"], "Tatooine");
    assert_eq!(body["planet"]["climate"], "arid");

    Ok(())
}

/// Expect numeric catalog fields to be accepted and stored as text
#[tokio::test]
async fn post_planet_accepts_numbers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let body = json!({ "name": "Bespin", "diameter": 118000, "population": "6000000" });
    let resp = app(&test)
        .oneshot(json_request("POST", "/planet", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["planet"]["diameter"], "118000");
    assert_eq!(body["planet"]["population"], "6000000");

    Ok(())
}

#[tokio::test]
async fn lists_starships_and_films() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog().insert_mock_starship("X-wing").await?;
    test.catalog().insert_mock_film("A New Hope").await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/starships"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["starship"][0]["name"], "X-wing");

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/films/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["film"]["title"], "A New Hope");

    let resp = app
        .oneshot(empty_request("GET", "/films/2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(empty_request("GET", "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"].get("/users/{id}/favorites").is_some());
    assert!(body["paths"].get("/planet/{id}").is_some());
    let bad_request = body["paths"]["/character"]["post"]["responses"]["400"]["description"]
        .as_str()
        .unwrap();
    assert!(bad_request.contains("homeworld_id"));
    assert_eq!(
        body["paths"]["/planet/{id}"]["put"]["requestBody"]["content"]["application/json"]
            ["schema"]["$ref"],
        "#/components/schemas/PlanetUpdateDto"
    );

    Ok(())
}
