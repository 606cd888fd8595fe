//! Message entity and repository trait.
//!
//! Maps to the `messages` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DeleteResult;
use crate::shared::error::AppError;

/// Read state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

impl MessageStatus {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "read" => Self::Read,
            _ => Self::Unread,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }
}

/// Represents a message.
///
/// Maps to the `messages` table:
/// - id: UUID PRIMARY KEY DEFAULT gen_random_uuid()
/// - sender: UUID NOT NULL
/// - content: TEXT NOT NULL
/// - sent_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - status: TEXT NOT NULL DEFAULT 'unread'
/// - seen_by: UUID[] NOT NULL DEFAULT '{}'
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender: Uuid,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub status: MessageStatus,
    pub seen_by: Vec<Uuid>,
}

impl Message {
    pub fn is_seen_by(&self, user_id: Uuid) -> bool {
        self.seen_by.contains(&user_id)
    }
}

/// Fields required to insert a message.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender: Uuid,
    pub content: String,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Message>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, AppError>;

    /// Load the referenced messages, preserving the order of `ids`.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Message>, AppError>;

    async fn create(&self, message: &NewMessage) -> Result<Option<Message>, AppError>;

    async fn update(&self, message: &Message) -> Result<Option<Message>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError>;

    async fn delete_all(&self) -> Result<DeleteResult, AppError>;
}
