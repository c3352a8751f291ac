use holonet::{model::user::NewUserDto, server::controller::user::create_user};

use super::*;

fn leia() -> NewUserDto {
    NewUserDto {
        name: Some("Leia".to_string()),
        last_name: Some("Organa".to_string()),
        password: Some("x".to_string()),
        email: Some("leia@rebels.org".to_string()),
    }
}

/// Expect 201 with the active user and no password
#[tokio::test]
async fn created_with_active_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(State(test.to_app_state::<AppState>()), Ok(Json(leia()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["email"], "leia@rebels.org");
    assert_eq!(body["user"]["is_active"], true);
    assert!(body["user"].get("password").is_none());

    Ok(())
}

/// Expect 400 naming the missing field
#[tokio::test]
async fn bad_request_for_missing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let body = NewUserDto {
        password: None,
        ..leia()
    };
    let result = create_user(State(test.to_app_state::<AppState>()), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "The PASSWORD field is required");

    Ok(())
}

/// Expect 409 when the email is already registered
#[tokio::test]
async fn conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("leia@rebels.org")
        .build()
        .await?;

    let result = create_user(State(test.to_app_state::<AppState>()), Ok(Json(leia()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
