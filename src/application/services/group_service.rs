//! Group Service
//!
//! Group CRUD and member lookup.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::dto::{CreateGroupRequest, UpdateGroupRequest};
use crate::domain::{DeleteResult, Group, GroupRepository, NewGroup, User, UserRepository};
use crate::shared::error::AppError;

/// Group service trait
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Create a group. `owner` becomes `createdBy` unless the request names one.
    async fn create(&self, request: CreateGroupRequest, owner: Uuid) -> Result<Group, GroupError>;

    async fn find_all(&self) -> Result<Vec<Group>, GroupError>;

    async fn find_one(&self, id: Uuid) -> Result<Option<Group>, GroupError>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateGroupRequest,
    ) -> Result<Option<Group>, GroupError>;

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, GroupError>;

    async fn remove_all(&self) -> Result<DeleteResult, GroupError>;

    /// Users listed as members, in list order. `None` when the group is missing.
    async fn find_members(&self, id: Uuid) -> Result<Option<Vec<User>>, GroupError>;
}

/// Group service errors
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Group with ID {0} not found")]
    NotFound(Uuid),

    #[error("Failed to create group")]
    CreateFailed,

    #[error(transparent)]
    Other(#[from] AppError),
}

impl From<GroupError> for AppError {
    fn from(err: GroupError) -> Self {
        let message = err.to_string();
        match err {
            GroupError::NotFound(_) => AppError::NotFound(message),
            GroupError::CreateFailed => AppError::BadRequest(message),
            GroupError::Other(e) => e,
        }
    }
}

/// GroupService implementation
pub struct GroupServiceImpl<G, U>
where
    G: GroupRepository,
    U: UserRepository,
{
    group_repo: Arc<G>,
    user_repo: Arc<U>,
}

impl<G, U> GroupServiceImpl<G, U>
where
    G: GroupRepository,
    U: UserRepository,
{
    pub fn new(group_repo: Arc<G>, user_repo: Arc<U>) -> Self {
        Self {
            group_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl<G, U> GroupService for GroupServiceImpl<G, U>
where
    G: GroupRepository + 'static,
    U: UserRepository + 'static,
{
    async fn create(&self, request: CreateGroupRequest, owner: Uuid) -> Result<Group, GroupError> {
        let new_group = NewGroup {
            name: request.name,
            members: request.members,
            created_by: request.created_by.or(Some(owner)),
            status: request.status.unwrap_or_default(),
            description: request.description,
        };

        self.group_repo
            .create(&new_group)
            .await?
            .ok_or(GroupError::CreateFailed)
    }

    async fn find_all(&self) -> Result<Vec<Group>, GroupError> {
        Ok(self.group_repo.find_all().await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Group>, GroupError> {
        Ok(self.group_repo.find_by_id(id).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateGroupRequest,
    ) -> Result<Option<Group>, GroupError> {
        let Some(mut group) = self.group_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(name) = request.name {
            group.name = name;
        }
        if let Some(members) = request.members {
            group.members = members;
        }
        if let Some(created_by) = request.created_by {
            group.created_by = created_by;
        }
        if let Some(status) = request.status {
            group.status = status;
        }
        if let Some(description) = request.description {
            group.description = description;
        }

        Ok(self.group_repo.update(&group).await?)
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, GroupError> {
        let result = self.group_repo.delete(id).await?;

        if result.is_empty() {
            return Err(GroupError::NotFound(id));
        }

        Ok(result)
    }

    async fn remove_all(&self) -> Result<DeleteResult, GroupError> {
        Ok(self.group_repo.delete_all().await?)
    }

    async fn find_members(&self, id: Uuid) -> Result<Option<Vec<User>>, GroupError> {
        let Some(group) = self.group_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.user_repo.find_by_ids(&group.members).await?))
    }
}
