//! Response DTOs
//!
//! Data structures for API response bodies. Every successful response is an
//! `ApiResponse` envelope: `{statusCode, message, links?, data}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    Chat, ChatType, Group, GroupStatus, Message, MessageStatus, User, UserRole, UserStatus,
};
use crate::shared::hypermedia::Link;

/// Success envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<&'static [Link]>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            links: None,
            data,
        }
    }

    /// 200 OK envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// 201 Created envelope
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    pub fn with_links(mut self, links: &'static [Link]) -> Self {
        self.links = Some(links);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// OpenAPI shape of the success envelope.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ApiResponseDoc {
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Chat retrieved successfully")]
    message: String,
    #[schema(value_type = Vec<Object>, example = json!([{ "self": { "href": "/chats/{id}", "method": "GET" } }]))]
    links: Vec<()>,
    #[schema(value_type = Object)]
    data: (),
}

/// User response; never carries the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub status: UserStatus,
    pub role: UserRole,
    pub friends: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar: user.avatar,
            status: user.status,
            role: user.role,
            friends: user.friends,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Group response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub status: GroupStatus,
    pub description: Option<String>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            members: group.members,
            created_by: group.created_by,
            created_at: group.created_at,
            status: group.status,
            description: group.description,
        }
    }
}

/// Chat response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    pub members: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Uuid>,
    pub messages: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            chat_type: chat.chat_type,
            members: chat.members,
            group: chat.group,
            messages: chat.messages,
            created_at: chat.created_at,
        }
    }
}

/// Message response
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender: Uuid,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub status: MessageStatus,
    pub seen_by: Vec<Uuid>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender: message.sender,
            content: message.content,
            sent_at: message.sent_at,
            status: message.status,
            seen_by: message.seen_by,
        }
    }
}

/// Map every element of a list into its response type.
pub fn into_responses<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
