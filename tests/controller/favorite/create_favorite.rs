use holonet::server::controller::favorite::{
    create_favorite_character, create_favorite_planet, create_favorite_starship,
};

use super::*;

/// Expect 201 even though neither the user nor the planet exist
#[tokio::test]
async fn created_for_unknown_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;

    let result = create_favorite_planet(State(test.to_app_state::<AppState>()), Path((1, 5))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["favorite"]["id"], 1);
    assert!(body["favorite"]["planet"].is_null());

    Ok(())
}

/// Expect the created favorite to embed the serialized character
#[tokio::test]
async fn embeds_character() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user("leia@rebels.org")
        .build()
        .await?;
    let (luke, _) = test
        .catalog()
        .insert_mock_character_with_homeworld("Luke Skywalker", "Tatooine")
        .await?;

    let resp = create_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((1, luke.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["favorite"]["character"]["name"], "Luke Skywalker");
    assert_eq!(body["favorite"]["character"]["homeworld"], "Tatooine");
    assert!(body["favorite"].get("character_id").is_none());

    Ok(())
}

#[tokio::test]
async fn embeds_starship() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user("leia@rebels.org")
        .build()
        .await?;
    let falcon = test
        .catalog()
        .insert_mock_starship("Millennium Falcon")
        .await?;

    let resp = create_favorite_starship(
        State(test.to_app_state::<AppState>()),
        Path((1, falcon.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["favorite"]["starship"]["name"], "Millennium Falcon");
    assert_eq!(body["favorite"]["starship"]["MGLT"], "100");

    Ok(())
}
