//! Group Handlers

use axum::extract::State;

use crate::application::dto::{
    into_responses, ApiResponse, ApiResponseDoc, CreateGroupRequest, GroupResponse,
    UpdateGroupRequest, UserResponse,
};
use crate::application::services::GroupError;
use crate::domain::DeleteResult;
use crate::presentation::http::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::hypermedia::{get_hyperlinks, Action, Resource};
use crate::startup::AppState;

/// Create a group; `createdBy` defaults to the caller
#[utoipa::path(
    post,
    path = "/groups",
    tag = "groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Group name already exists", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreateGroupRequest>,
) -> Result<ApiResponse<GroupResponse>, AppError> {
    let group = state.services.groups.create(body, auth.user_id).await?;

    Ok(ApiResponse::created("Group created successfully", GroupResponse::from(group))
        .with_links(get_hyperlinks(Resource::Group, Action::Create)))
}

/// List groups
#[utoipa::path(
    get,
    path = "/groups",
    tag = "groups",
    responses(
        (status = 200, description = "Groups fetched", body = ApiResponseDoc),
        (status = 404, description = "No groups found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_groups(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<GroupResponse>>, AppError> {
    let groups = state.services.groups.find_all().await?;
    if groups.is_empty() {
        return Err(AppError::NotFound("No groups found".into()));
    }

    Ok(ApiResponse::ok("Groups fetched successfully", into_responses(groups))
        .with_links(get_hyperlinks(Resource::Group, Action::AllGroups)))
}

/// Get a group
#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id (UUID)")),
    responses(
        (status = 200, description = "Group fetched", body = ApiResponseDoc),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_group(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<GroupResponse>, AppError> {
    let group = state
        .services
        .groups
        .find_one(id)
        .await?
        .ok_or(GroupError::NotFound(id))?;

    Ok(ApiResponse::ok("Group fetched successfully", GroupResponse::from(group))
        .with_links(get_hyperlinks(Resource::Group, Action::Read)))
}

/// Update a group
#[utoipa::path(
    put,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id (UUID)")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated", body = ApiResponseDoc),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_group(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateGroupRequest>,
) -> Result<ApiResponse<GroupResponse>, AppError> {
    let group = state
        .services
        .groups
        .update(id, body)
        .await?
        .ok_or(GroupError::NotFound(id))?;

    Ok(ApiResponse::ok("Group updated successfully", GroupResponse::from(group))
        .with_links(get_hyperlinks(Resource::Group, Action::Update)))
}

/// Delete a group
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id (UUID)")),
    responses(
        (status = 200, description = "Group deleted", body = ApiResponseDoc),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_group(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.groups.remove(id).await?;

    Ok(ApiResponse::ok("Group deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Group, Action::Delete)))
}

/// Delete every group
#[utoipa::path(
    delete,
    path = "/groups",
    tag = "groups",
    responses(
        (status = 200, description = "Groups deleted", body = ApiResponseDoc),
        (status = 404, description = "No groups found to delete", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_groups(
    State(state): State<AppState>,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.groups.remove_all().await?;
    if result.is_empty() {
        return Err(AppError::NotFound("No groups found to delete".into()));
    }

    Ok(ApiResponse::ok("All groups deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Group, Action::Delete)))
}

/// List the users in a group
#[utoipa::path(
    get,
    path = "/groups/{id}/members",
    tag = "groups",
    params(("id" = String, Path, description = "Group id (UUID)")),
    responses(
        (status = 200, description = "Members fetched", body = ApiResponseDoc),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_members(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<Vec<UserResponse>>, AppError> {
    let members = state
        .services
        .groups
        .find_members(id)
        .await?
        .ok_or(GroupError::NotFound(id))?;

    Ok(ApiResponse::ok("Group members fetched successfully", into_responses(members))
        .with_links(get_hyperlinks(Resource::Group, Action::Read)))
}
