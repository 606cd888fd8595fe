//! Group API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, TestUser};

#[tokio::test]
async fn test_create_group_defaults_owner_to_caller() {
    let app = TestApp::new();
    let (token, me) = app.signup_with_id(&TestUser::fake()).await;

    let response = app.post("/groups", json!({ "name": "rustaceans" }), &token).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Group created successfully");
    assert_eq!(response.data()["createdBy"], me.to_string());
    assert_eq!(response.data()["status"], "active");
    assert_eq!(response.data()["members"], json!([]));
}

#[tokio::test]
async fn test_create_group_requires_name() {
    let app = TestApp::new();

    let response = app.post("/groups", json!({ "name": "" }), &app.any_token()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.messages(), vec!["name should not be empty".to_string()]);
}

#[tokio::test]
async fn test_duplicate_group_name_is_conflict() {
    let app = TestApp::new();
    let token = app.any_token();
    app.post("/groups", json!({ "name": "rustaceans" }), &token).await;

    let response = app.post("/groups", json!({ "name": "rustaceans" }), &token).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.messages(),
        vec!["name with value rustaceans already exists".to_string()]
    );
}

#[tokio::test]
async fn test_group_members_lookup() {
    let app = TestApp::new();
    let user = TestUser::fake();
    let (token, me) = app.signup_with_id(&user).await;
    let created = app
        .post("/groups", json!({ "name": "crew", "members": [me] }), &token)
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let response = app.get(&format!("/groups/{}/members", id), &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()[0]["username"], user.username.as_str());
}

#[tokio::test]
async fn test_update_group_status() {
    let app = TestApp::new();
    let token = app.any_token();
    let created = app.post("/groups", json!({ "name": "crew" }), &token).await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .put(
            &format!("/groups/{}", id),
            json!({ "status": "inactive", "description": "archived" }),
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "inactive");
    assert_eq!(response.data()["description"], "archived");
    assert_eq!(response.data()["name"], "crew");
}

#[tokio::test]
async fn test_update_unknown_group() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .put(&format!("/groups/{}", id), json!({ "name": "x" }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.messages(), vec![format!("Group with ID {} not found", id)]);
}

#[tokio::test]
async fn test_delete_all_groups() {
    let app = TestApp::new();
    let token = app.any_token();

    let empty = app.delete("/groups", &token).await;
    assert_eq!(empty.status, StatusCode::NOT_FOUND);
    assert_eq!(empty.messages(), vec!["No groups found to delete".to_string()]);

    app.post("/groups", json!({ "name": "one" }), &token).await;
    app.post("/groups", json!({ "name": "two" }), &token).await;
    let response = app.delete("/groups", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "All groups deleted successfully");
    assert_eq!(response.data()["deletedCount"], 2);
}
