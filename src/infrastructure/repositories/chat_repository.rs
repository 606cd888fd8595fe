//! Chat Repository Implementation
//!
//! PostgreSQL implementation of chat operations. Message references live in
//! the `messages` UUID array and are appended with `array_append`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Chat, ChatRepository, ChatType, DeleteResult, NewChat};
use crate::shared::error::AppError;

/// PostgreSQL chat repository
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: Uuid,
    chat_type: String,
    members: Vec<Uuid>,
    group_id: Option<Uuid>,
    messages: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl ChatRow {
    fn into_chat(self) -> Chat {
        Chat {
            id: self.id,
            chat_type: ChatType::from_str(&self.chat_type),
            members: self.members,
            group: self.group_id,
            messages: self.messages,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn find_all(&self) -> Result<Vec<Chat>, AppError> {
        let rows = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, chat_type, members, group_id, messages, created_at
            FROM chats
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ChatRow::into_chat).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, chat_type, members, group_id, messages, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChatRow::into_chat))
    }

    async fn create(&self, chat: &NewChat) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (chat_type, members, group_id, messages)
            VALUES ($1, $2, $3, $4)
            RETURNING id, chat_type, members, group_id, messages, created_at
            "#,
        )
        .bind(chat.chat_type.as_str())
        .bind(&chat.members)
        .bind(chat.group)
        .bind(&chat.messages)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChatRow::into_chat))
    }

    async fn update(&self, chat: &Chat) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            UPDATE chats
            SET chat_type = $2, members = $3, group_id = $4, messages = $5
            WHERE id = $1
            RETURNING id, chat_type, members, group_id, messages, created_at
            "#,
        )
        .bind(chat.id)
        .bind(chat.chat_type.as_str())
        .bind(&chat.members)
        .bind(chat.group)
        .bind(&chat.messages)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChatRow::into_chat))
    }

    async fn push_message(
        &self,
        chat_id: Uuid,
        message_id: Uuid,
    ) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            UPDATE chats
            SET messages = array_append(messages, $2)
            WHERE id = $1
            RETURNING id, chat_type, members, group_id, messages, created_at
            "#,
        )
        .bind(chat_id)
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChatRow::into_chat))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    async fn delete_all(&self) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM chats").execute(&self.pool).await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
