//! Group Repository Implementation
//!
//! PostgreSQL implementation of group operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{DeleteResult, Group, GroupRepository, GroupStatus, NewGroup};
use crate::shared::error::AppError;

/// PostgreSQL group repository
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GroupRow {
    id: Uuid,
    name: String,
    members: Vec<Uuid>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    status: String,
    description: Option<String>,
}

impl GroupRow {
    fn into_group(self) -> Group {
        Group {
            id: self.id,
            name: self.name,
            members: self.members,
            created_by: self.created_by,
            created_at: self.created_at,
            status: GroupStatus::from_str(&self.status),
            description: self.description,
        }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn find_all(&self) -> Result<Vec<Group>, AppError> {
        let rows = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT id, name, members, created_by, created_at, status, description
            FROM groups
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GroupRow::into_group).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, AppError> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            SELECT id, name, members, created_by, created_at, status, description
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn create(&self, group: &NewGroup) -> Result<Option<Group>, AppError> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            INSERT INTO groups (name, members, created_by, status, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, members, created_by, created_at, status, description
            "#,
        )
        .bind(&group.name)
        .bind(&group.members)
        .bind(group.created_by)
        .bind(group.status.as_str())
        .bind(&group.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn update(&self, group: &Group) -> Result<Option<Group>, AppError> {
        let row = sqlx::query_as::<_, GroupRow>(
            r#"
            UPDATE groups
            SET name = $2, members = $3, created_by = $4, status = $5, description = $6
            WHERE id = $1
            RETURNING id, name, members, created_by, created_at, status, description
            "#,
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.members)
        .bind(group.created_by)
        .bind(group.status.as_str())
        .bind(&group.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GroupRow::into_group))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    async fn delete_all(&self) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM groups")
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
