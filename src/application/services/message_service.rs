//! Message Service
//!
//! Message CRUD. Messages posted through a chat go through `ChatService`.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::domain::{DeleteResult, Message, MessageRepository, NewMessage};
use crate::shared::error::AppError;
use crate::shared::validation::all_unique;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    async fn create(&self, request: CreateMessageRequest) -> Result<Message, MessageError>;

    async fn find_all(&self) -> Result<Vec<Message>, MessageError>;

    async fn find_one(&self, id: Uuid) -> Result<Option<Message>, MessageError>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateMessageRequest,
    ) -> Result<Option<Message>, MessageError>;

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, MessageError>;

    async fn remove_all(&self) -> Result<DeleteResult, MessageError>;
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Message with ID {0} not found")]
    NotFound(Uuid),

    #[error("Failed to create message")]
    CreateFailed,

    #[error("All seenBy's elements must be unique")]
    DuplicateSeenBy,

    #[error(transparent)]
    Other(#[from] AppError),
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        let message = err.to_string();
        match err {
            MessageError::NotFound(_) => AppError::NotFound(message),
            MessageError::CreateFailed => AppError::BadRequest(message),
            MessageError::DuplicateSeenBy => AppError::Validation(vec![message]),
            MessageError::Other(e) => e,
        }
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<M>
where
    M: MessageRepository,
{
    message_repo: Arc<M>,
}

impl<M> MessageServiceImpl<M>
where
    M: MessageRepository,
{
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }
}

#[async_trait]
impl<M> MessageService for MessageServiceImpl<M>
where
    M: MessageRepository + 'static,
{
    async fn create(&self, request: CreateMessageRequest) -> Result<Message, MessageError> {
        let new_message = NewMessage {
            sender: request.sender,
            content: request.content,
        };

        self.message_repo
            .create(&new_message)
            .await?
            .ok_or(MessageError::CreateFailed)
    }

    async fn find_all(&self) -> Result<Vec<Message>, MessageError> {
        Ok(self.message_repo.find_all().await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Message>, MessageError> {
        Ok(self.message_repo.find_by_id(id).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateMessageRequest,
    ) -> Result<Option<Message>, MessageError> {
        if let Some(seen_by) = &request.seen_by {
            if !all_unique(seen_by) {
                return Err(MessageError::DuplicateSeenBy);
            }
        }

        let Some(mut message) = self.message_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(content) = request.content {
            message.content = content;
        }
        if let Some(status) = request.status {
            message.status = status;
        }
        if let Some(seen_by) = request.seen_by {
            message.seen_by = seen_by;
        }

        Ok(self.message_repo.update(&message).await?)
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, MessageError> {
        let result = self.message_repo.delete(id).await?;

        if result.is_empty() {
            return Err(MessageError::NotFound(id));
        }

        Ok(result)
    }

    async fn remove_all(&self) -> Result<DeleteResult, MessageError> {
        Ok(self.message_repo.delete_all().await?)
    }
}
