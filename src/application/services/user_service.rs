//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::dto::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{DeleteResult, NewUser, User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::password::hash_password_blocking;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user; the password is hashed before it is stored.
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError>;

    async fn find_all(&self) -> Result<Vec<User>, UserError>;

    async fn find_one(&self, id: Uuid) -> Result<Option<User>, UserError>;

    /// Merge the present fields into the stored user. `None` when the user is missing.
    async fn update(&self, id: Uuid, request: UpdateUserRequest)
        -> Result<Option<User>, UserError>;

    /// Delete a user; fails with `NotFound` when nothing was deleted.
    async fn remove(&self, id: Uuid) -> Result<DeleteResult, UserError>;

    /// The user's friends in list order. `None` when the user is missing.
    async fn find_friends(&self, id: Uuid) -> Result<Option<Vec<User>>, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User with ID {0} not found")]
    NotFound(Uuid),

    #[error("Failed to create user")]
    CreateFailed,

    #[error(transparent)]
    Other(#[from] AppError),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) => AppError::NotFound(message),
            UserError::CreateFailed => AppError::BadRequest(message),
            UserError::Other(e) => e,
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let new_user = NewUser {
            username: request.username,
            email: request.email,
            password_hash: hash_password_blocking(request.password).await?,
            first_name: request.first_name,
            last_name: request.last_name,
            avatar: request.avatar,
            status: request.status.unwrap_or_default(),
            role: request.role.unwrap_or_default(),
            friends: request.friends,
        };

        self.user_repo
            .create(&new_user)
            .await?
            .ok_or(UserError::CreateFailed)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repo.find_all().await?)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<User>, UserError> {
        Ok(self.user_repo.find_by_id(id).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<Option<User>, UserError> {
        let Some(mut user) = self.user_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(username) = request.username {
            user.username = username;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(password) = request.password {
            user.password_hash = hash_password_blocking(password).await?;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name;
        }
        if let Some(avatar) = request.avatar {
            user.avatar = avatar;
        }
        if let Some(status) = request.status {
            user.status = status;
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(friends) = request.friends {
            user.friends = friends;
        }

        Ok(self.user_repo.update(&user).await?)
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, UserError> {
        let result = self.user_repo.delete(id).await?;

        if result.is_empty() {
            return Err(UserError::NotFound(id));
        }

        Ok(result)
    }

    async fn find_friends(&self, id: Uuid) -> Result<Option<Vec<User>>, UserError> {
        let Some(user) = self.user_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.user_repo.find_by_ids(&user.friends).await?))
    }
}
