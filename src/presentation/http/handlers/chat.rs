//! Chat Handlers
//!
//! Chat CRUD plus the chat's message timeline under `/chats/{id}/messages`.

use axum::extract::State;

use crate::application::dto::{
    into_responses, ApiResponse, ApiResponseDoc, ChatResponse, CreateChatRequest,
    MessageResponse, SendMessageRequest, UpdateChatRequest,
};
use crate::application::services::ChatError;
use crate::domain::DeleteResult;
use crate::presentation::http::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::hypermedia::{get_hyperlinks, Action, Resource};
use crate::startup::AppState;

/// Create a chat
#[utoipa::path(
    post,
    path = "/chats",
    tag = "chats",
    request_body = CreateChatRequest,
    responses(
        (status = 201, description = "Chat created", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload or chat shape", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_chat(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateChatRequest>,
) -> Result<ApiResponse<ChatResponse>, AppError> {
    let chat = state.services.chats.create(body).await?;

    Ok(ApiResponse::created("Chat created successfully", ChatResponse::from(chat))
        .with_links(get_hyperlinks(Resource::Chat, Action::Create)))
}

/// List chats
#[utoipa::path(
    get,
    path = "/chats",
    tag = "chats",
    responses(
        (status = 200, description = "Chats fetched", body = ApiResponseDoc),
        (status = 404, description = "No chats found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_chats(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ChatResponse>>, AppError> {
    let chats = state.services.chats.find_all().await?;
    if chats.is_empty() {
        return Err(AppError::NotFound("No chats found".into()));
    }

    Ok(ApiResponse::ok("Chats fetched successfully", into_responses(chats))
        .with_links(get_hyperlinks(Resource::Chat, Action::AllChats)))
}

/// Get a chat
#[utoipa::path(
    get,
    path = "/chats/{id}",
    tag = "chats",
    params(("id" = String, Path, description = "Chat id (UUID)")),
    responses(
        (status = 200, description = "Chat fetched", body = ApiResponseDoc),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Chat not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_chat(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<ChatResponse>, AppError> {
    let chat = state
        .services
        .chats
        .find_one(id)
        .await?
        .ok_or(ChatError::NotFound(id))?;

    Ok(ApiResponse::ok("Chat fetched successfully", ChatResponse::from(chat))
        .with_links(get_hyperlinks(Resource::Chat, Action::Read)))
}

/// Update a chat
#[utoipa::path(
    put,
    path = "/chats/{id}",
    tag = "chats",
    params(("id" = String, Path, description = "Chat id (UUID)")),
    request_body = UpdateChatRequest,
    responses(
        (status = 200, description = "Chat updated", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload or chat shape", body = ErrorResponse),
        (status = 404, description = "Chat not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_chat(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateChatRequest>,
) -> Result<ApiResponse<ChatResponse>, AppError> {
    let chat = state
        .services
        .chats
        .update(id, body)
        .await?
        .ok_or(ChatError::NotFound(id))?;

    Ok(ApiResponse::ok("Chat updated successfully", ChatResponse::from(chat))
        .with_links(get_hyperlinks(Resource::Chat, Action::Update)))
}

/// Delete a chat
#[utoipa::path(
    delete,
    path = "/chats/{id}",
    tag = "chats",
    params(("id" = String, Path, description = "Chat id (UUID)")),
    responses(
        (status = 200, description = "Chat deleted", body = ApiResponseDoc),
        (status = 404, description = "Chat not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_chat(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.chats.remove(id).await?;

    Ok(ApiResponse::ok("Chat deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Chat, Action::Delete)))
}

/// Delete every chat
#[utoipa::path(
    delete,
    path = "/chats",
    tag = "chats",
    responses(
        (status = 200, description = "Chats deleted", body = ApiResponseDoc),
        (status = 404, description = "No chats found to delete", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_chats(
    State(state): State<AppState>,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let result = state.services.chats.remove_all().await?;
    if result.is_empty() {
        return Err(AppError::NotFound("No chats found to delete".into()));
    }

    Ok(ApiResponse::ok("All chats deleted successfully", result)
        .with_links(get_hyperlinks(Resource::Chat, Action::Delete)))
}

/// The chat's messages, oldest first
#[utoipa::path(
    get,
    path = "/chats/{id}/messages",
    tag = "chats",
    params(("id" = String, Path, description = "Chat id (UUID)")),
    responses(
        (status = 200, description = "Messages fetched", body = ApiResponseDoc),
        (status = 404, description = "Chat not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_chat_messages(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    let messages = state
        .services
        .chats
        .find_messages(id)
        .await?
        .ok_or(ChatError::NotFound(id))?;

    Ok(ApiResponse::ok("Messages fetched successfully", into_responses(messages))
        .with_links(get_hyperlinks(Resource::Message, Action::AllMessages)))
}

/// Post a message into the chat as the caller
#[utoipa::path(
    post,
    path = "/chats/{id}/messages",
    tag = "chats",
    params(("id" = String, Path, description = "Chat id (UUID)")),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Chat not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn send_chat_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<SendMessageRequest>,
) -> Result<ApiResponse<MessageResponse>, AppError> {
    let message = state
        .services
        .chats
        .send_message(id, auth.user_id, body)
        .await?
        .ok_or(ChatError::NotFound(id))?;

    Ok(ApiResponse::created("Message sent successfully", MessageResponse::from(message))
        .with_links(get_hyperlinks(Resource::Message, Action::Create)))
}
