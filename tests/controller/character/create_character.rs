use holonet::{model::character::NewCharacterDto, server::controller::character::create_character};

use super::*;

fn luke(homeworld_id: i32) -> NewCharacterDto {
    NewCharacterDto {
        name: Some("Luke Skywalker".to_string()),
        height: Some("172".to_string()),
        weight: Some("77".to_string()),
        homeworld_id: Some(homeworld_id),
        ..Default::default()
    }
}

/// Expect 201 with weight returned as mass and the homeworld name
#[tokio::test]
async fn created_with_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = create_character(State(test.to_app_state::<AppState>()), Ok(Json(luke(1))))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["character"]["mass"], "77");
    assert_eq!(body["character"]["homeworld"], "Tatooine");

    Ok(())
}

#[tokio::test]
async fn bad_request_for_missing_height() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let body = NewCharacterDto {
        height: None,
        ..luke(1)
    };
    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "The HEIGHT field is required");

    Ok(())
}

/// Expect a character without a homeworld to be rejected before the planet lookup
#[tokio::test]
async fn bad_request_for_missing_homeworld_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let body = NewCharacterDto {
        homeworld_id: None,
        ..luke(1)
    };
    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "The HOMEWORLD_ID field is required");

    Ok(())
}

#[tokio::test]
async fn not_found_for_nonexistent_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_character(State(test.to_app_state::<AppState>()), Ok(Json(luke(3)))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
