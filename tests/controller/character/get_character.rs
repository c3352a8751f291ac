use holonet::server::controller::character::{get_character, get_characters};

use super::*;

#[tokio::test]
async fn returns_character_with_homeworld_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let (luke, _) = test
        .catalog()
        .insert_mock_character_with_homeworld("Luke Skywalker", "Tatooine")
        .await?;

    let resp = get_character(State(test.to_app_state::<AppState>()), Path(luke.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["character"]["name"], "Luke Skywalker");
    assert_eq!(body["character"]["homeworld"], "Tatooine");
    assert!(body["character"].get("homeworld_id").is_none());

    Ok(())
}

#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog()
        .insert_mock_character_with_homeworld("Luke Skywalker", "Tatooine")
        .await?;
    test.catalog()
        .insert_mock_character_with_homeworld("Leia Organa", "Alderaan")
        .await?;

    let resp = get_characters(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["character"].as_array().unwrap().len(), 2);

    Ok(())
}
