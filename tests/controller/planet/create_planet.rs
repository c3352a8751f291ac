use holonet::{
    model::planet::{PlanetDetailsDto, PlanetFieldsDto},
    server::controller::planet::{create_planet, get_planet},
};

use super::*;

#[tokio::test]
async fn created_with_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let body = PlanetFieldsDto {
        name: Some("Hoth".to_string()),
        details: PlanetDetailsDto {
            climate: Some("frozen".to_string()),
            ..Default::default()
        },
    };
    let resp = create_planet(State(test.to_app_state::<AppState>()), Ok(Json(body)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["planet"]["name"], "Hoth");
    assert_eq!(body["planet"]["climate"], "frozen");
    assert!(body["planet"]["terrain"].is_null());

    Ok(())
}

/// Expect 400 naming the field when name is missing
#[tokio::test]
async fn bad_request_without_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_planet(
        State(test.to_app_state::<AppState>()),
        Ok(Json(PlanetFieldsDto::default())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "The NAME field is required");

    Ok(())
}

#[tokio::test]
async fn not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), Path(5)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
