//! Group entity and repository trait.
//!
//! Maps to the `groups` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DeleteResult;
use crate::shared::error::AppError;

/// Group lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Inactive,
    #[default]
    Active,
}

impl GroupStatus {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inactive" => Self::Inactive,
            _ => Self::Active,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }
}

/// A named set of users.
///
/// `members` and `created_by` are weak references to `users.id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub status: GroupStatus,
    pub description: Option<String>,
}

impl Group {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }

    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.created_by == Some(user_id)
    }
}

/// Fields required to insert a group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewGroup {
    pub name: String,
    pub members: Vec<Uuid>,
    pub created_by: Option<Uuid>,
    pub status: GroupStatus,
    pub description: Option<String>,
}

/// Repository trait for Group data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Group>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, AppError>;

    async fn create(&self, group: &NewGroup) -> Result<Option<Group>, AppError>;

    async fn update(&self, group: &Group) -> Result<Option<Group>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, AppError>;

    async fn delete_all(&self) -> Result<DeleteResult, AppError>;
}
