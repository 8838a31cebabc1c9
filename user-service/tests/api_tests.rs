mod common;

use auth::Claims;
use auth::JwtHandler;
use auth::UserClaims;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "exampleUser",
            "password": "examplePass",
            "fullname": "Example User"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "exampleUser");
    assert_eq!(body["fullname"], "Example User");
    assert!(body["id"].is_string());

    // The sanitized view carries exactly these three fields
    let keys = body.as_object().expect("Expected an object");
    assert_eq!(keys.len(), 3);
    assert!(!keys.contains_key("password"));
}

#[tokio::test]
async fn test_create_user_missing_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"password": "examplePass", "fullname": "Example User"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Missing 'username' in request body");
}

#[tokio::test]
async fn test_create_user_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": "exampleUser", "fullname": "Example User"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Missing 'password' in request body");
}

#[tokio::test]
async fn test_create_user_non_string_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": 123, "password": "examplePass"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Field: 'username' must be type String");
}

#[tokio::test]
async fn test_create_user_non_string_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": "exampleUser", "password": 123}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Field: 'password' must be type String");
}

#[tokio::test]
async fn test_create_user_untrimmed_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": " exampleUser ", "password": "examplePass"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Field: 'username' cannot start or end with whitespace"
    );
}

#[tokio::test]
async fn test_create_user_untrimmed_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": "exampleUser", "password": " examplePass "}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Field: 'password' cannot start or end with whitespace"
    );
}

#[tokio::test]
async fn test_create_user_password_too_short() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": "exampleUser", "password": "p"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Field: 'password' must be at least 8 characters long"
    );
}

#[tokio::test]
async fn test_create_user_password_too_long() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({"username": "exampleUser", "password": "p".repeat(73)}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Field: 'password' must be at most 72 characters long"
    );
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register_example_user().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "exampleUser",
            "password": "examplePass",
            "fullname": "Example User"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "The username already exists");
}

#[tokio::test]
async fn test_create_user_trims_fullname() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "exampleUser",
            "password": "examplePass",
            "fullname": " Example User "
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["fullname"], "Example User");
}

#[tokio::test]
async fn test_login_returns_valid_token() {
    let app = TestApp::spawn().await;

    let created = app.register_example_user().await;

    let response = app
        .post("/api/login")
        .json(&json!({"username": "exampleUser", "password": "examplePass"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["authToken"].as_str().expect("authToken not a string");

    // Decode into loose JSON so unexpected fields would show up
    let payload: serde_json::Value = app
        .jwt_handler
        .decode(token)
        .expect("Failed to decode auth token");

    assert_eq!(
        payload["user"],
        json!({
            "id": created["id"],
            "username": "exampleUser",
            "fullname": "Example User"
        })
    );
    assert!(payload["user"].get("password").is_none());
    assert_eq!(payload["sub"], "exampleUser");
    assert!(payload["exp"].as_i64().unwrap() > payload["iat"].as_i64().unwrap());
}

#[tokio::test]
async fn test_login_rejects_empty_body() {
    let app = TestApp::spawn().await;

    app.register_example_user().await;

    let response = app
        .post("/api/login")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_username_and_wrong_password_look_identical() {
    let app = TestApp::spawn().await;

    app.register_example_user().await;

    let wrong_username = app
        .post("/api/login")
        .json(&json!({"username": "falseashell", "password": "examplePass"}))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_username_status = wrong_username.status();
    let wrong_username_body = wrong_username.text().await.expect("Failed to read body");

    let wrong_password = app
        .post("/api/login")
        .json(&json!({"username": "exampleUser", "password": "nopenopenope"}))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_password_status = wrong_password.status();
    let wrong_password_body = wrong_password.text().await.expect("Failed to read body");

    assert_eq!(wrong_username_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    // No enumeration signal: the two failures are byte-identical
    assert_eq!(wrong_username_body, wrong_password_body);
}

#[tokio::test]
async fn test_refresh_rejects_missing_header() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/refresh")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_token_signed_with_other_secret() {
    let app = TestApp::spawn().await;

    let foreign_handler = JwtHandler::new(b"incorrect-secret-also-32-bytes-long!!");
    let claims = Claims::for_user(
        UserClaims {
            id: "333333333333333333333300".to_string(),
            username: "exampleUser".to_string(),
            fullname: "Example User".to_string(),
        },
        common::TEST_TTL_DAYS,
    );
    let token = foreign_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/api/refresh", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let app = TestApp::spawn().await;

    let now = Utc::now();
    let claims = Claims {
        user: UserClaims {
            id: "333333333333333333333300".to_string(),
            username: "exampleUser".to_string(),
            fullname: "Example User".to_string(),
        },
        sub: "exampleUser".to_string(),
        iat: (now - Duration::days(8)).timestamp(),
        exp: (now - Duration::days(1)).timestamp(),
    };
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode");

    let response = app
        .post_authenticated("/api/refresh", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_returns_token_with_newer_expiry() {
    let app = TestApp::spawn().await;

    app.register_example_user().await;

    let login: serde_json::Value = app
        .post("/api/login")
        .json(&json!({"username": "exampleUser", "password": "examplePass"}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let original_token = login["authToken"].as_str().expect("authToken not a string");
    let original: Claims = app
        .jwt_handler
        .decode(original_token)
        .expect("Failed to decode original token");

    let response = app
        .post_authenticated("/api/refresh", original_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let refreshed_token = body["authToken"].as_str().expect("authToken not a string");
    let refreshed: Claims = app
        .jwt_handler
        .decode(refreshed_token)
        .expect("Failed to decode refreshed token");

    assert!(refreshed.exp >= original.exp);
    assert_eq!(refreshed.user, original.user);
    assert_eq!(refreshed.sub, original.sub);
}
