use holonet::{model::planet::PlanetUpdateDto, server::controller::planet::update_planet};

use super::*;

/// Expect only the name to change when the body carries only a name
#[tokio::test]
async fn updates_name_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let body = PlanetUpdateDto {
        name: Some("Tatooine II".to_string()),
    };
    let resp = update_planet(
        State(test.to_app_state::<AppState>()),
        Path(1),
        Ok(Json(body)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["planet"]["name"], "Tatooine II");
    assert_eq!(body["planet"]["climate"], "arid");
    assert_eq!(body["planet"]["population"], "200000");

    Ok(())
}

#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let body = PlanetUpdateDto {
        name: Some("Alderaan".to_string()),
    };
    let result = update_planet(
        State(test.to_app_state::<AppState>()),
        Path(5),
        Ok(Json(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
