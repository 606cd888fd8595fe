//! OpenAPI Document
//!
//! Served as Swagger UI at `/docs`, raw JSON at `/docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::application::dto::{
    ApiResponseDoc, ChatResponse, CreateChatRequest, CreateGroupRequest, CreateMessageRequest,
    CreateUserRequest, GroupResponse, LoginRequest, MessageResponse, SendMessageRequest,
    SignupRequest, UpdateChatRequest, UpdateGroupRequest, UpdateMessageRequest,
    UpdateUserRequest, UserResponse,
};
use crate::domain::{ChatType, DeleteResult, GroupStatus, MessageStatus, UserRole, UserStatus};
use crate::presentation::http::handlers::{self, health};
use crate::shared::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(title = "Messenger API", description = "Users, groups, chats and messages"),
    paths(
        handlers::auth::login,
        handlers::auth::signup,
        handlers::user::create_user,
        handlers::user::get_users,
        handlers::user::get_user,
        handlers::user::update_user,
        handlers::user::delete_user,
        handlers::user::get_user_friends,
        handlers::group::create_group,
        handlers::group::get_groups,
        handlers::group::get_group,
        handlers::group::update_group,
        handlers::group::delete_group,
        handlers::group::delete_groups,
        handlers::group::get_group_members,
        handlers::chat::create_chat,
        handlers::chat::get_chats,
        handlers::chat::get_chat,
        handlers::chat::update_chat,
        handlers::chat::delete_chat,
        handlers::chat::delete_chats,
        handlers::chat::get_chat_messages,
        handlers::chat::send_chat_message,
        handlers::message::create_message,
        handlers::message::get_messages,
        handlers::message::get_message,
        handlers::message::update_message,
        handlers::message::delete_message,
        handlers::message::delete_messages,
        health::health_check,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        ApiResponseDoc,
        ErrorResponse,
        DeleteResult,
        LoginRequest,
        SignupRequest,
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        UserStatus,
        UserRole,
        CreateGroupRequest,
        UpdateGroupRequest,
        GroupResponse,
        GroupStatus,
        CreateChatRequest,
        UpdateChatRequest,
        ChatResponse,
        ChatType,
        CreateMessageRequest,
        SendMessageRequest,
        UpdateMessageRequest,
        MessageResponse,
        MessageStatus,
        health::HealthResponse,
        health::ReadinessResponse,
        health::ServiceHealth,
        health::HealthStatus,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "users", description = "User management"),
        (name = "groups", description = "Group management"),
        (name = "chats", description = "Chats and their message timeline"),
        (name = "messages", description = "Message management"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by protected operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
