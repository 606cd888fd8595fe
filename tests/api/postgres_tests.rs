//! PostgreSQL API Tests
//!
//! Run against the database named by `DATABASE_URL`; each test returns early
//! when it is unset. Names carry random suffixes so runs can share a database.

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use messenger_api::domain::{ChatRepository, MessageRepository, NewMessage, NewUser, UserRepository};
use messenger_api::infrastructure::repositories::{
    PgChatRepository, PgMessageRepository, PgUserRepository,
};
use messenger_api::shared::error::{classify_database_error, AppError, DatabaseFailure};

use crate::common::{postgres_pool, TestApp, TestUser};

async fn signup_conflict(app: &TestApp, body: serde_json::Value) -> Vec<String> {
    let response = app
        .request(Method::POST, "/auth/signup", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT, "{}", response.body);
    assert_eq!(response.body["statusCode"], 409);
    assert_eq!(response.body["error"], "Conflict");
    response.messages()
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "not-a-real-hash".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let user = TestUser::unique();
    app.signup(&user).await;

    let other = TestUser::unique();
    let messages = signup_conflict(
        &app,
        json!({ "email": other.email, "username": user.username, "password": "p1" }),
    )
    .await;

    assert_eq!(
        messages,
        vec![format!("username with value {} already exists", user.username)]
    );
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let user = TestUser::unique();
    app.signup(&user).await;

    let other = TestUser::unique();
    let messages = signup_conflict(
        &app,
        json!({ "email": user.email, "username": other.username, "password": "p1" }),
    )
    .await;

    assert_eq!(
        messages,
        vec![format!("email with value {} already exists", user.email)]
    );
}

#[tokio::test]
async fn test_duplicate_username_and_email_reports_username() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let user = TestUser::unique();
    app.signup(&user).await;

    let messages = signup_conflict(&app, user.signup_body()).await;

    assert_eq!(
        messages,
        vec![format!("username with value {} already exists", user.username)]
    );
}

#[tokio::test]
async fn test_duplicate_group_name_is_conflict() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let token = app.any_token();
    let name = format!("group_{}", Uuid::new_v4().simple());

    let created = app.post("/groups", json!({ "name": name }), &token).await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);

    let response = app.post("/groups", json!({ "name": name }), &token).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.messages(),
        vec![format!("name with value {} already exists", name)]
    );
}

#[tokio::test]
async fn test_find_by_ids_keeps_input_order_and_skips_missing() {
    let Some(pool) = postgres_pool().await else { return };
    let repo = PgUserRepository::new(pool);
    let suffix = &Uuid::new_v4().simple().to_string()[..8];

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let user = repo
            .create(&new_user(&format!("{}_{}", name, suffix)))
            .await
            .unwrap()
            .unwrap();
        ids.push(user.id);
    }

    let found = repo
        .find_by_ids(&[ids[2], Uuid::new_v4(), ids[0], ids[1]])
        .await
        .unwrap();

    let found_ids: Vec<Uuid> = found.iter().map(|u| u.id).collect();
    assert_eq!(found_ids, vec![ids[2], ids[0], ids[1]]);
}

#[tokio::test]
async fn test_chat_timeline_follows_send_order() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let token = app.any_token();

    let chat = app
        .post("/chats", json!({ "type": "direct", "members": [Uuid::new_v4()] }), &token)
        .await;
    assert_eq!(chat.status, StatusCode::CREATED, "{}", chat.body);
    let id = chat.data()["id"].as_str().unwrap().to_string();

    for content in ["first", "second", "third"] {
        let sent = app
            .post(&format!("/chats/{}/messages", id), json!({ "content": content }), &token)
            .await;
        assert_eq!(sent.status, StatusCode::CREATED);
    }

    let timeline = app.get(&format!("/chats/{}/messages", id), &token).await;

    assert_eq!(timeline.status, StatusCode::OK);
    let contents: Vec<&str> = timeline
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["content"].as_str())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_push_message_to_missing_chat_is_none() {
    let Some(pool) = postgres_pool().await else { return };
    let repo = PgChatRepository::new(pool);

    let result = repo
        .push_message(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_nul_byte_in_content_is_bad_request() {
    let Some(pool) = postgres_pool().await else { return };
    let repo = PgMessageRepository::new(pool);

    let err = repo
        .create(&NewMessage {
            sender: Uuid::new_v4(),
            content: "a\u{0}b".into(),
        })
        .await
        .unwrap_err();

    match &err {
        AppError::Database(e) => {
            assert!(matches!(classify_database_error(e), DatabaseFailure::InvalidData(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_null_first_name_is_stored_as_null() {
    let Some(pool) = postgres_pool().await else { return };
    let app = TestApp::with_pool(pool);
    let user = TestUser::unique();
    let mut body = user.signup_body();
    body["firstName"] = json!("Ada");
    let signup = app
        .request(Method::POST, "/auth/signup", Some(body), None)
        .await;
    assert_eq!(signup.status, StatusCode::CREATED, "{}", signup.body);
    let token = signup.data().as_str().unwrap().to_string();

    let listed = app
        .get("/users", &token)
        .await
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == user.username.as_str())
        .cloned()
        .unwrap();
    assert_eq!(listed["firstName"], "Ada");
    let id = listed["id"].as_str().unwrap().to_string();

    let updated = app
        .put(&format!("/users/{}", id), json!({ "firstName": null }), &token)
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{}", updated.body);

    let fetched = app.get(&format!("/users/{}", id), &token).await;
    assert_eq!(fetched.data()["firstName"], serde_json::Value::Null);
    assert_eq!(fetched.data()["username"], user.username.as_str());
}
