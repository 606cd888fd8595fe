//! User Handlers

use axum::extract::State;

use crate::application::dto::{
    into_responses, ApiResponse, ApiResponseDoc, CreateUserRequest, UpdateUserRequest,
    UserResponse,
};
use crate::application::services::UserError;
use crate::domain::DeleteResult;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::hypermedia::{get_hyperlinks, Action, Resource};
use crate::startup::AppState;

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = state.services.users.create(body).await?;

    Ok(ApiResponse::created("User created successfully", UserResponse::from(user))
        .with_links(get_hyperlinks(Resource::User, Action::Create)))
}

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users fetched", body = ApiResponseDoc),
        (status = 404, description = "No users found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserResponse>>, AppError> {
    let users = state.services.users.find_all().await?;
    if users.is_empty() {
        return Err(AppError::NotFound("No users found".into()));
    }

    Ok(ApiResponse::ok("Users fetched successfully", into_responses(users))
        .with_links(get_hyperlinks(Resource::User, Action::AllUsers)))
}

/// Get a user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "User fetched", body = ApiResponseDoc),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = state
        .services
        .users
        .find_one(id)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok(ApiResponse::ok("User fetched successfully", UserResponse::from(user))
        .with_links(get_hyperlinks(Resource::User, Action::Read)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = state
        .services
        .users
        .update(id, body)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok(ApiResponse::ok("User updated successfully", UserResponse::from(user))
        .with_links(get_hyperlinks(Resource::User, Action::Update)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponseDoc),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.users.remove(id).await?;

    Ok(ApiResponse::ok("User deleted successfully", result)
        .with_links(get_hyperlinks(Resource::User, Action::Delete)))
}

/// List a user's friends
#[utoipa::path(
    get,
    path = "/users/{id}/friends",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "Friends fetched", body = ApiResponseDoc),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_friends(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<Vec<UserResponse>>, AppError> {
    let friends = state
        .services
        .users
        .find_friends(id)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok(ApiResponse::ok("Friends fetched successfully", into_responses(friends))
        .with_links(get_hyperlinks(Resource::User, Action::Read)))
}
