//! User API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use uuid::Uuid;

use crate::common::{TestApp, TestUser};

#[test_case("/users" ; "users")]
#[test_case("/groups" ; "groups")]
#[test_case("/chats" ; "chats")]
#[test_case("/messages" ; "messages")]
#[tokio::test]
async fn test_protected_routes_require_token(uri: &str) {
    let app = TestApp::new();

    let response = app.request(Method::GET, uri, None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
    assert_eq!(response.messages(), vec!["Missing authorization header".to_string()]);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get("/users", "not.a.jwt").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.messages(), vec!["Invalid token".to_string()]);
}

#[tokio::test]
async fn test_empty_user_list_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/users", &app.any_token()).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.messages(), vec!["No users found".to_string()]);
}

#[tokio::test]
async fn test_user_list_hides_password() {
    let app = TestApp::new();
    let token = app.signup(&TestUser::fake()).await;

    let response = app.get("/users", &token).await;
    let user = &response.data()[0];

    assert_eq!(response.body["message"], "Users fetched successfully");
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password").is_none());
    assert_eq!(user["status"], "offline");
    assert_eq!(user["role"], "user");
}

#[tokio::test]
async fn test_get_user_with_malformed_id() {
    let app = TestApp::new();

    let response = app.get("/users/not-a-uuid", &app.any_token()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.messages(), vec!["ID should be a valid UUID".to_string()]);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app.get(&format!("/users/{}", id), &app.any_token()).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.messages(), vec![format!("User with ID {} not found", id)]);
}

#[tokio::test]
async fn test_create_then_read_user() {
    let app = TestApp::new();
    let token = app.any_token();
    let body = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "secret",
        "firstName": "Alice",
        "status": "online"
    });

    let created = app.post("/users", body, &token).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "User created successfully");

    let id = created.data()["id"].as_str().unwrap().to_string();
    let fetched = app.get(&format!("/users/{}", id), &token).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["username"], "alice");
    assert_eq!(fetched.data()["firstName"], "Alice");
    assert_eq!(fetched.data()["status"], "online");
}

#[tokio::test]
async fn test_update_user_validates_username_length() {
    let app = TestApp::new();
    let user = TestUser::fake();
    let (token, id) = app.signup_with_id(&user).await;

    let response = app
        .put(&format!("/users/{}", id), json!({ "username": "abc" }), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.messages(), vec!["username must be 4-16 characters".to_string()]);
}

#[tokio::test]
async fn test_update_user_merges_fields() {
    let app = TestApp::new();
    let user = TestUser::fake();
    let (token, id) = app.signup_with_id(&user).await;

    let response = app
        .put(&format!("/users/{}", id), json!({ "status": "typing" }), &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User updated successfully");
    assert_eq!(response.data()["status"], "typing");
    assert_eq!(response.data()["username"], user.username.as_str());
}

#[tokio::test]
async fn test_update_user_null_clears_field() {
    let app = TestApp::new();
    let (token, id) = app.signup_with_id(&TestUser::fake()).await;
    let uri = format!("/users/{}", id);

    let named = app
        .put(&uri, json!({ "firstName": "Ada", "lastName": "Lovelace" }), &token)
        .await;
    assert_eq!(named.data()["firstName"], "Ada");

    let cleared = app.put(&uri, json!({ "firstName": null }), &token).await;

    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.data()["firstName"], Value::Null);
    assert_eq!(cleared.data()["lastName"], "Lovelace");
}

#[tokio::test]
async fn test_delete_user_then_read_is_not_found() {
    let app = TestApp::new();
    let (token, id) = app.signup_with_id(&TestUser::fake()).await;

    let deleted = app.delete(&format!("/users/{}", id), &token).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["deletedCount"], 1);

    let again = app.delete(&format!("/users/{}", id), &token).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_friends_keep_list_order() {
    let app = TestApp::new();
    let (token, me) = app.signup_with_id(&TestUser::fake()).await;
    let (_, first) = app.signup_with_id(&TestUser::fake()).await;
    let (_, second) = app.signup_with_id(&TestUser::fake()).await;

    app.put(
        &format!("/users/{}", me),
        json!({ "friends": [second, first] }),
        &token,
    )
    .await;
    let response = app.get(&format!("/users/{}/friends", me), &token).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["id"].as_str())
        .collect();
    assert_eq!(ids, vec![second.to_string(), first.to_string()]);
}
