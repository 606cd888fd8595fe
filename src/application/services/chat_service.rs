//! Chat Service
//!
//! Chat CRUD plus the chat's message timeline. A chat is either direct
//! (members, no group) or a group chat (group, no members); both create and
//! update refuse any other shape.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::dto::{CreateChatRequest, SendMessageRequest, UpdateChatRequest};
use crate::domain::{
    shape_violations, Chat, ChatRepository, ChatType, DeleteResult, Message, MessageRepository,
    NewChat, NewMessage,
};
use crate::shared::error::AppError;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn create(&self, request: CreateChatRequest) -> Result<Chat, ChatError>;

    async fn find_all(&self) -> Result<Vec<Chat>, ChatError>;

    async fn find_one(&self, id: Uuid) -> Result<Option<Chat>, ChatError>;

    async fn update(&self, id: Uuid, request: UpdateChatRequest)
        -> Result<Option<Chat>, ChatError>;

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ChatError>;

    async fn remove_all(&self) -> Result<DeleteResult, ChatError>;

    /// The chat's messages in timeline order. `None` when the chat is missing.
    async fn find_messages(&self, id: Uuid) -> Result<Option<Vec<Message>>, ChatError>;

    /// Store a message and append it to the chat. `None` when the chat is missing.
    ///
    /// The insert and the append are separate writes; if the append fails the
    /// message row stays behind without a chat.
    async fn send_message(
        &self,
        chat_id: Uuid,
        sender: Uuid,
        request: SendMessageRequest,
    ) -> Result<Option<Message>, ChatError>;
}

/// Chat service errors
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat with ID {0} not found")]
    NotFound(Uuid),

    #[error("Failed to create chat")]
    CreateFailed,

    #[error("Failed to create message")]
    MessageFailed,

    #[error("Invalid chat: {}", .0.join(", "))]
    InvalidShape(Vec<String>),

    #[error(transparent)]
    Other(#[from] AppError),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        let message = err.to_string();
        match err {
            ChatError::NotFound(_) => AppError::NotFound(message),
            ChatError::CreateFailed | ChatError::MessageFailed => AppError::BadRequest(message),
            ChatError::InvalidShape(violations) => AppError::Validation(violations),
            ChatError::Other(e) => e,
        }
    }
}

fn check_shape(chat_type: ChatType, members: &[Uuid], group: Option<Uuid>) -> Result<(), ChatError> {
    let violations = shape_violations(chat_type, members, group);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ChatError::InvalidShape(violations))
    }
}

/// Apply an update request to a stored chat.
///
/// Switching to a direct chat drops the group and switching to a group chat
/// drops the members, unless the request sets them explicitly. An explicit
/// `group: null` detaches the chat from its group.
fn merge_update(chat: &mut Chat, request: UpdateChatRequest) {
    if let Some(chat_type) = request.chat_type {
        if chat_type != chat.chat_type {
            match chat_type {
                ChatType::Direct if request.group.is_none() => chat.group = None,
                ChatType::Group if request.members.is_none() => chat.members.clear(),
                _ => {}
            }
        }
        chat.chat_type = chat_type;
    }
    if let Some(members) = request.members {
        chat.members = members;
    }
    if let Some(messages) = request.messages {
        chat.messages = messages;
    }
    if let Some(group) = request.group {
        chat.group = group;
    }
}

/// ChatService implementation
pub struct ChatServiceImpl<C, M>
where
    C: ChatRepository,
    M: MessageRepository,
{
    chat_repo: Arc<C>,
    message_repo: Arc<M>,
}

impl<C, M> ChatServiceImpl<C, M>
where
    C: ChatRepository,
    M: MessageRepository,
{
    pub fn new(chat_repo: Arc<C>, message_repo: Arc<M>) -> Self {
        Self {
            chat_repo,
            message_repo,
        }
    }
}

#[async_trait]
impl<C, M> ChatService for ChatServiceImpl<C, M>
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    async fn create(&self, request: CreateChatRequest) -> Result<Chat, ChatError> {
        check_shape(request.chat_type, &request.members, request.group)?;

        let new_chat = NewChat {
            chat_type: request.chat_type,
            members: request.members,
            group: request.group,
            messages: request.messages,
        };

        self.chat_repo
            .create(&new_chat)
            .await?
            .ok_or(ChatError::CreateFailed)
    }

    async fn find_all(&self) -> Result<Vec<Chat>, ChatError> {
        Ok(self.chat_repo.find_all().await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Chat>, ChatError> {
        Ok(self.chat_repo.find_by_id(id).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateChatRequest,
    ) -> Result<Option<Chat>, ChatError> {
        let Some(mut chat) = self.chat_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        merge_update(&mut chat, request);
        check_shape(chat.chat_type, &chat.members, chat.group)?;

        Ok(self.chat_repo.update(&chat).await?)
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ChatError> {
        let result = self.chat_repo.delete(id).await?;

        if result.is_empty() {
            return Err(ChatError::NotFound(id));
        }

        Ok(result)
    }

    async fn remove_all(&self) -> Result<DeleteResult, ChatError> {
        Ok(self.chat_repo.delete_all().await?)
    }

    async fn find_messages(&self, id: Uuid) -> Result<Option<Vec<Message>>, ChatError> {
        let Some(chat) = self.chat_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.message_repo.find_by_ids(&chat.messages).await?))
    }

    async fn send_message(
        &self,
        chat_id: Uuid,
        sender: Uuid,
        request: SendMessageRequest,
    ) -> Result<Option<Message>, ChatError> {
        if self.chat_repo.find_by_id(chat_id).await?.is_none() {
            return Ok(None);
        }

        let message = self
            .message_repo
            .create(&NewMessage {
                sender,
                content: request.content,
            })
            .await?
            .ok_or(ChatError::MessageFailed)?;

        if self.chat_repo.push_message(chat_id, message.id).await?.is_none() {
            tracing::warn!(%chat_id, message_id = %message.id, "Chat vanished before message was appended");
            return Ok(None);
        }

        Ok(Some(message))
    }
}
