//! Request DTOs
//!
//! Data structures for API request bodies. Field rules are checked by the
//! `ValidatedJson` extractor before a handler runs.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ChatType, GroupStatus, MessageStatus, UserRole, UserStatus};
use crate::shared::validation::no_nul_chars;

/// Keep an explicit `null` apart from an absent key.
///
/// Paired with `#[serde(default)]`: absent gives `None`, `null` gives
/// `Some(None)` and a value gives `Some(Some(v))`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@b.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password should not be empty"))]
    #[schema(example = "p1")]
    pub password: String,
}

/// Signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "a@b.com")]
    pub email: String,

    #[validate(
        length(min = 1, message = "username should not be empty"),
        custom(function = "no_nul_chars", message = "username must not contain null characters")
    )]
    #[schema(example = "a")]
    pub username: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    #[schema(example = "p1")]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(url(message = "avatar must be a URL address"))]
    pub avatar: Option<String>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, message = "username should not be empty"),
        custom(function = "no_nul_chars", message = "username must not contain null characters")
    )]
    pub username: String,

    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(url(message = "avatar must be a URL address"))]
    pub avatar: Option<String>,

    pub status: Option<UserStatus>,
    pub role: Option<UserRole>,

    #[serde(default)]
    pub friends: Vec<Uuid>,
}

/// Update user request; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 4, max = 16, message = "username must be 4-16 characters"),
        custom(function = "no_nul_chars", message = "username must not contain null characters")
    )]
    pub username: Option<String>,

    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: Option<String>,

    /// `null` clears the stored value
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub first_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Option<String>>,

    #[validate(url(message = "avatar must be a URL address"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,

    pub status: Option<UserStatus>,
    pub role: Option<UserRole>,
    pub friends: Option<Vec<Uuid>>,
}

/// Create group request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(
        length(min = 1, message = "name should not be empty"),
        custom(function = "no_nul_chars", message = "name must not contain null characters")
    )]
    #[schema(example = "rustaceans")]
    pub name: String,

    #[serde(default)]
    pub members: Vec<Uuid>,

    /// Defaults to the authenticated user
    pub created_by: Option<Uuid>,

    pub status: Option<GroupStatus>,

    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Update group request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[validate(
        length(min = 1, message = "name should not be empty"),
        custom(function = "no_nul_chars", message = "name must not contain null characters")
    )]
    pub name: Option<String>,

    pub members: Option<Vec<Uuid>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub created_by: Option<Option<Uuid>>,

    pub status: Option<GroupStatus>,

    /// `null` clears the stored value
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

/// Create chat request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChatRequest {
    #[serde(rename = "type")]
    pub chat_type: ChatType,

    /// Participants of a direct chat; empty for group chats
    #[serde(default)]
    pub members: Vec<Uuid>,

    #[serde(default)]
    pub messages: Vec<Uuid>,

    /// Required only for group chats
    pub group: Option<Uuid>,
}

/// Update chat request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateChatRequest {
    #[serde(rename = "type")]
    pub chat_type: Option<ChatType>,

    pub members: Option<Vec<Uuid>>,
    pub messages: Option<Vec<Uuid>>,

    /// `null` detaches the chat from its group
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub group: Option<Option<Uuid>>,
}

/// Create message request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    pub sender: Uuid,

    #[validate(
        length(min = 1, message = "content should not be empty"),
        custom(function = "no_nul_chars", message = "content must not contain null characters")
    )]
    #[schema(example = "hello")]
    pub content: String,
}

/// Post a message into a chat; the sender is the authenticated user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(
        length(min = 1, message = "content should not be empty"),
        custom(function = "no_nul_chars", message = "content must not contain null characters")
    )]
    #[schema(example = "hello")]
    pub content: String,
}

/// Update message request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[validate(
        length(min = 1, message = "content should not be empty"),
        custom(function = "no_nul_chars", message = "content must not contain null characters")
    )]
    pub content: Option<String>,

    #[serde(alias = "type")]
    pub status: Option<MessageStatus>,

    /// Must not contain duplicates
    pub seen_by: Option<Vec<Uuid>>,
}
