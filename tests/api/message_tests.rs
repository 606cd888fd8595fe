//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::TestApp;

async fn create_message(app: &TestApp, token: &str) -> String {
    let response = app
        .post(
            "/messages",
            json!({ "sender": Uuid::new_v4(), "content": "hello" }),
            token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_message_defaults() {
    let app = TestApp::new();
    let token = app.any_token();

    let id = create_message(&app, &token).await;
    let response = app.get(&format!("/messages/{}", id), &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "unread");
    assert_eq!(response.data()["seenBy"], json!([]));
    assert!(response.data()["sentAt"].is_string());
}

#[tokio::test]
async fn test_create_message_requires_content() {
    let app = TestApp::new();

    let response = app
        .post(
            "/messages",
            json!({ "sender": Uuid::new_v4(), "content": "" }),
            &app.any_token(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.messages(), vec!["content should not be empty".to_string()]);
}

#[tokio::test]
async fn test_create_message_rejects_nul_character() {
    let app = TestApp::new();

    let response = app
        .post(
            "/messages",
            json!({ "sender": Uuid::new_v4(), "content": "a\u{0}b" }),
            &app.any_token(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.messages(),
        vec!["content must not contain null characters".to_string()]
    );
}

#[tokio::test]
async fn test_update_message_rejects_nul_character() {
    let app = TestApp::new();
    let token = app.any_token();
    let id = create_message(&app, &token).await;

    let response = app
        .put(&format!("/messages/{}", id), json!({ "content": "a\u{0}b" }), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.messages(),
        vec!["content must not contain null characters".to_string()]
    );
}

#[tokio::test]
async fn test_mark_message_read() {
    let app = TestApp::new();
    let token = app.any_token();
    let id = create_message(&app, &token).await;
    let reader = Uuid::new_v4();

    let response = app
        .put(
            &format!("/messages/{}", id),
            json!({ "type": "read", "seenBy": [reader] }),
            &token,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "read");
    assert_eq!(response.data()["seenBy"], json!([reader]));
    assert_eq!(response.data()["content"], "hello");
}

#[tokio::test]
async fn test_duplicate_seen_by_is_rejected() {
    let app = TestApp::new();
    let token = app.any_token();
    let id = create_message(&app, &token).await;
    let reader = Uuid::new_v4();

    let response = app
        .put(&format!("/messages/{}", id), json!({ "seenBy": [reader, reader] }), &token)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.messages(),
        vec!["All seenBy's elements must be unique".to_string()]
    );
}

#[tokio::test]
async fn test_delete_unknown_message() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app.delete(&format!("/messages/{}", id), &app.any_token()).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.messages(), vec![format!("Message with ID {} not found", id)]);
}

#[tokio::test]
async fn test_delete_all_messages() {
    let app = TestApp::new();
    let token = app.any_token();
    create_message(&app, &token).await;

    let response = app.delete("/messages", &token).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deletedCount"], 1);

    let listed = app.get("/messages", &token).await;
    assert_eq!(listed.status, StatusCode::NOT_FOUND);
    assert_eq!(listed.messages(), vec!["No messages found".to_string()]);
}
