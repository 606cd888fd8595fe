//! Message Handlers

use axum::extract::State;

use crate::application::dto::{
    into_responses, ApiResponse, ApiResponseDoc, CreateMessageRequest, MessageResponse,
    UpdateMessageRequest,
};
use crate::application::services::MessageError;
use crate::domain::DeleteResult;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::hypermedia::{get_hyperlinks, Action, Resource};
use crate::startup::AppState;

/// Create a message
#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateMessageRequest>,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    let message = state.services.messages.create(body).await?;

    Ok(ApiResponse::created("Message created successfully", MessageResponse::from(message))
        .with_links(get_hyperlinks(Resource::Message, Action::Create)))
}

/// List messages
#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    responses(
        (status = 200, description = "Messages fetched", body = ApiResponseDoc),
        (status = 404, description = "No messages found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_messages(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    let messages = state.services.messages.find_all().await?;
    if messages.is_empty() {
        return Err(AppError::NotFound("No messages found".into()));
    }

    Ok(ApiResponse::ok("Messages fetched successfully", into_responses(messages))
        .with_links(get_hyperlinks(Resource::Message, Action::AllMessages)))
}

/// Get a message
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "messages",
    params(("id" = String, Path, description = "Message id (UUID)")),
    responses(
        (status = 200, description = "Message fetched", body = ApiResponseDoc),
        (status = 404, description = "Message not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    let message = state
        .services
        .messages
        .find_one(id)
        .await?
        .ok_or(MessageError::NotFound(id))?;

    Ok(ApiResponse::ok("Message fetched successfully", MessageResponse::from(message))
        .with_links(get_hyperlinks(Resource::Message, Action::Read)))
}

/// Update a message
#[utoipa::path(
    put,
    path = "/messages/{id}",
    tag = "messages",
    params(("id" = String, Path, description = "Message id (UUID)")),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Message updated", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload or duplicate seenBy", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateMessageRequest>,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    let message = state
        .services
        .messages
        .update(id, body)
        .await?
        .ok_or(MessageError::NotFound(id))?;

    Ok(ApiResponse::ok("Message updated successfully", MessageResponse::from(message))
        .with_links(get_hyperlinks(Resource::Message, Action::Update)))
}

/// Delete a message
#[utoipa::path(
    delete,
    path = "/messages/{id}",
    tag = "messages",
    params(("id" = String, Path, description = "Message id (UUID)")),
    responses(
        (status = 200, description = "Message deleted", body = ApiResponseDoc),
        (status = 404, description = "Message not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.messages.remove(id).await?;

    Ok(ApiResponse::ok("Message deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Message, Action::Delete)))
}

/// Delete every message
#[utoipa::path(
    delete,
    path = "/messages",
    tag = "messages",
    responses(
        (status = 200, description = "Messages deleted", body = ApiResponseDoc),
        (status = 404, description = "No messages found to delete", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_messages(
    State(state): State<AppState>,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.messages.remove_all().await?;
    if result.is_empty() {
        return Err(AppError::NotFound("No messages found to delete".into()));
    }

    Ok(ApiResponse::ok("All messages deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Message, Action::Delete)))
}
