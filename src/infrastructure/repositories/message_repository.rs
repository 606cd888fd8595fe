//! Message Repository Implementation
//!
//! PostgreSQL implementation of message operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{DeleteResult, Message, MessageRepository, MessageStatus, NewMessage};
use crate::shared::error::AppError;

/// PostgreSQL message repository implementation.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
/// Maps to the messages table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    sender: Uuid,
    content: String,
    sent_at: DateTime<Utc>,
    status: String,
    seen_by: Vec<Uuid>,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            sender: self.sender,
            content: self.content,
            sent_at: self.sent_at,
            status: MessageStatus::from_str(&self.status),
            seen_by: self.seen_by,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, sender, content, sent_at, status, seen_by
            FROM messages
            ORDER BY sent_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_message()).collect())
    }

    /// Find a message by its ID.
    ///
    /// Returns None if the message does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, sender, content, sent_at, status, seen_by
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    /// Messages are returned in the order of `ids`, which is the chat's order.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Message>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, sender, content, sent_at, status, seen_by
            FROM messages
            WHERE id = ANY($1)
            ORDER BY array_position($1, id)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_message()).collect())
    }

    async fn create(&self, message: &NewMessage) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (sender, content)
            VALUES ($1, $2)
            RETURNING id, sender, content, sent_at, status, seen_by
            "#,
        )
        .bind(message.sender)
        .bind(&message.content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    async fn update(&self, message: &Message) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            UPDATE messages
            SET sender = $2, content = $3, status = $4, seen_by = $5
            WHERE id = $1
            RETURNING id, sender, content, sent_at, status, seen_by
            "#,
        )
        .bind(message.id)
        .bind(message.sender)
        .bind(&message.content)
        .bind(message.status.as_str())
        .bind(&message.seen_by)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    /// Removes every message. Chats keep their (now dangling) references.
    async fn delete_all(&self) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
