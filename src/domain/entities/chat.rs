//! Chat entity and repository trait.
//!
//! Maps to the `chats` table. A chat is either a direct conversation between
//! `members` or the conversation of a `group`, never both.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DeleteResult;
use crate::shared::error::AppError;

/// Chat kind matching the `chats.chat_type` CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Direct,
    Group,
}

impl ChatType {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "group" => Self::Group,
            _ => Self::Direct,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
        }
    }
}

/// A conversation and the ordered list of its messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    pub members: Vec<Uuid>,
    pub group: Option<Uuid>,
    /// Message references, oldest first
    pub messages: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Rules this chat breaks; empty when the shape is valid.
    pub fn shape_violations(&self) -> Vec<String> {
        shape_violations(self.chat_type, &self.members, self.group)
    }
}

/// Direct chats need members and no group; group chats need a group and no members.
pub fn shape_violations(chat_type: ChatType, members: &[Uuid], group: Option<Uuid>) -> Vec<String> {
    let mut violations = Vec::new();

    match chat_type {
        ChatType::Direct => {
            if members.is_empty() {
                violations.push("members should not be empty for direct chats".to_string());
            }
            if group.is_some() {
                violations.push("group must be empty for direct chats".to_string());
            }
        }
        ChatType::Group => {
            if group.is_none() {
                violations.push("group is required for group chats".to_string());
            }
            if !members.is_empty() {
                violations.push("members must be empty for group chats".to_string());
            }
        }
    }

    violations
}

/// Fields required to insert a chat.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChat {
    pub chat_type: ChatType,
    pub members: Vec<Uuid>,
    pub group: Option<Uuid>,
    pub messages: Vec<Uuid>,
}

/// Repository trait for Chat data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Chat>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, AppError>;

    async fn create(&self, chat: &NewChat) -> Result<Option<Chat>, AppError>;

    async fn update(&self, chat: &Chat) -> Result<Option<Chat>, AppError>;

    /// Append a message reference to the end of the chat's list.
    async fn push_message(&self, chat_id: Uuid, message_id: Uuid)
        -> Result<Option<Chat>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError>;

    async fn delete_all(&self) -> Result<DeleteResult, AppError>;
}
