//! # Domain Entities
//!
//! Core domain entities of the messenger. Each entity maps to one table and
//! comes with a repository trait implemented in the infrastructure layer.
//!
//! - **User**: account, profile and friend references
//! - **Group**: a named set of users
//! - **Chat**: a direct or group conversation holding message references
//! - **Message**: a message with read state
//!
//! References between entities are plain id lists; nothing cascades.

mod chat;
mod group;
mod message;
mod user;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use chat::{shape_violations, Chat, ChatRepository, ChatType, NewChat};
pub use group::{Group, GroupRepository, GroupStatus, NewGroup};
pub use message::{Message, MessageRepository, MessageStatus, NewMessage};
pub use user::{NewUser, User, UserRepository, UserRole, UserStatus};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use group::MockGroupRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use user::MockUserRepository;

/// Outcome of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self { deleted_count }
    }

    pub fn is_empty(&self) -> bool {
        self.deleted_count == 0
    }
}
