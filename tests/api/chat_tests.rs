//! Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, TestUser};

#[tokio::test]
async fn test_create_direct_chat() {
    let app = TestApp::new();
    let members = [Uuid::new_v4(), Uuid::new_v4()];

    let response = app
        .post("/chats", json!({ "type": "direct", "members": members }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Chat created successfully");
    assert_eq!(response.data()["type"], "direct");
    assert_eq!(response.data()["messages"], json!([]));
    assert!(response.data().get("group").is_none());
}

#[tokio::test]
async fn test_direct_chat_with_group_is_rejected() {
    let app = TestApp::new();
    let body = json!({ "type": "direct", "members": [Uuid::new_v4()], "group": Uuid::new_v4() });

    let response = app.post("/chats", body, &app.any_token()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.messages(),
        vec!["group must be empty for direct chats".to_string()]
    );
}

#[tokio::test]
async fn test_group_chat_requires_group() {
    let app = TestApp::new();

    let response = app
        .post("/chats", json!({ "type": "group" }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.messages(),
        vec!["group is required for group chats".to_string()]
    );
}

#[tokio::test]
async fn test_unknown_chat_type_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post("/chats", json!({ "type": "broadcast" }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_chat() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .put(&format!("/chats/{}", id), json!({ "members": [] }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(response.messages(), vec![format!("Chat with ID {} not found", id)]);
}

#[tokio::test]
async fn test_switching_to_group_chat_drops_members() {
    let app = TestApp::new();
    let token = app.any_token();
    let created = app
        .post("/chats", json!({ "type": "direct", "members": [Uuid::new_v4()] }), &token)
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();
    let group = Uuid::new_v4();

    let response = app
        .put(&format!("/chats/{}", id), json!({ "type": "group", "group": group }), &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["type"], "group");
    assert_eq!(response.data()["members"], json!([]));
    assert_eq!(response.data()["group"], group.to_string());
}

#[tokio::test]
async fn test_send_message_appends_to_timeline() {
    let app = TestApp::new();
    let (token, me) = app.signup_with_id(&TestUser::fake()).await;
    let created = app
        .post("/chats", json!({ "type": "direct", "members": [me] }), &token)
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let first = app
        .post(&format!("/chats/{}/messages", id), json!({ "content": "hello" }), &token)
        .await;
    app.post(&format!("/chats/{}/messages", id), json!({ "content": "again" }), &token)
        .await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.data()["sender"], me.to_string());
    assert_eq!(first.data()["status"], "unread");

    let timeline = app.get(&format!("/chats/{}/messages", id), &token).await;
    let contents: Vec<&str> = timeline
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["content"].as_str())
        .collect();
    assert_eq!(contents, vec!["hello", "again"]);

    let chat = app.get(&format!("/chats/{}", id), &token).await;
    assert_eq!(chat.data()["messages"][0], first.data()["id"]);
}

#[tokio::test]
async fn test_send_message_to_unknown_chat() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .post(&format!("/chats/{}/messages", id), json!({ "content": "hi" }), &app.any_token())
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.messages(), vec![format!("Chat with ID {} not found", id)]);
}

#[tokio::test]
async fn test_delete_chat() {
    let app = TestApp::new();
    let token = app.any_token();
    let created = app
        .post("/chats", json!({ "type": "group", "group": Uuid::new_v4() }), &token)
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let response = app.delete(&format!("/chats/{}", id), &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Chat deleted successfully");
    assert_eq!(app.get(&format!("/chats/{}", id), &token).await.status, StatusCode::NOT_FOUND);
}
