//! Authentication API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{TestApp, TestUser};

#[tokio::test]
async fn test_signup_returns_token_in_envelope() {
    let app = TestApp::new();
    let user = TestUser::fake();

    let response = app
        .request(Method::POST, "/auth/signup", Some(user.signup_body()), None)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["statusCode"], 201);
    assert_eq!(response.body["message"], "User created successfully");
    assert!(response.data().as_str().is_some_and(|t| t.split('.').count() == 3));
    assert_eq!(
        response.body["links"][0],
        json!({ "self": { "href": "/auth/signup", "method": "POST" } })
    );
}

#[tokio::test]
async fn test_signup_token_opens_protected_routes() {
    let app = TestApp::new();
    let token = app.signup(&TestUser::fake()).await;

    let response = app.get("/users", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_signup_duplicate_username_is_conflict() {
    let app = TestApp::new();
    let user = TestUser::fake();
    app.signup(&user).await;

    let mut again = TestUser::fake();
    again.username = user.username.clone();
    let response = app
        .request(Method::POST, "/auth/signup", Some(again.signup_body()), None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "Conflict");
    assert_eq!(
        response.messages(),
        vec![format!("username with value {} already exists", user.username)]
    );
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = TestApp::new();
    let body = json!({ "email": "not-an-email", "username": "a", "password": "p1" });

    let response = app.request(Method::POST, "/auth/signup", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
    assert!(response.messages().contains(&"email must be an email".to_string()));
}

#[tokio::test]
async fn test_login_returns_token() {
    let app = TestApp::new();
    let user = TestUser::fake();
    app.signup(&user).await;

    let response = app
        .request(Method::POST, "/auth/login", Some(user.login_body()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User logged in successfully");
    let token = response.data().as_str().unwrap();
    assert_eq!(app.get("/users", token).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();
    let body = json!({ "email": "nobody@example.com", "password": "p1" });

    let response = app.request(Method::POST, "/auth/login", Some(body), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.messages(), vec!["Invalid Email".to_string()]);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let user = TestUser::fake();
    app.signup(&user).await;

    let body = json!({ "email": user.email, "password": "definitely-wrong" });
    let response = app.request(Method::POST, "/auth/login", Some(body), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.messages(), vec!["Invalid Password".to_string()]);
}

#[tokio::test]
async fn test_login_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app
        .request(Method::POST, "/auth/login", Some(json!({ "email": 42 })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
}
