use holonet::server::controller::favorite::get_user_favorites;

use super::*;

/// Expect every favorite kind to list the favorited records themselves
#[tokio::test]
async fn returns_favorites_grouped_by_kind() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let leia = test.user().insert_mock_user("leia@rebels.org").await?;
    let hoth = test.catalog().insert_mock_planet("Hoth").await?;
    test.user().insert_favorite_planet(leia.id, hoth.id).await?;
    test.user().insert_favorite_character(leia.id, 42).await?;

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()), Path(leia.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "OK");
    assert_eq!(body["favorite_planets"][0]["id"], hoth.id);
    assert_eq!(body["favorite_planets"][0]["name"], "Hoth");
    assert!(body["favorite_planets"][0].get("planet").is_none());
    // Character 42 does not exist so its favorite is left out
    assert_eq!(body["favorite_characters"].as_array().unwrap().len(), 0);
    assert_eq!(body["favorite_starships"].as_array().unwrap().len(), 0);

    Ok(())
}

#[tokio::test]
async fn not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;

    let result = get_user_favorites(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
