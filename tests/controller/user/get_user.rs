use holonet::server::controller::user::{get_user, get_users};

use super::*;

/// Expect 200 with the user in the envelope and no password
#[tokio::test]
async fn returns_user_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia@rebels.org")
        .build()
        .await?;

    let result = get_user(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "OK");
    assert_eq!(body["user"]["email"], "leia@rebels.org");
    assert!(body["user"].get("password").is_none());

    Ok(())
}

/// Expect 404 with a message mentioning the requested ID
#[tokio::test]
async fn not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.to_app_state::<AppState>()), Path(9999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["msg"].as_str().unwrap().contains("9999"));

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "Internal server error");

    Ok(())
}

#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia@rebels.org")
        .with_mock_user("han@falcon.net")
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"].as_array().unwrap().len(), 2);

    Ok(())
}
