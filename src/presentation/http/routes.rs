//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers;
use crate::presentation::middleware::{auth_middleware, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", auth_routes())
        .merge(protected_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(handlers::health::metrics_handler))
        // Only matched routes are counted, keyed by their template
        .route_layer(middleware::from_fn(track_metrics))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/signup", post(handlers::auth::signup))
}

/// Resource routes (require a bearer token)
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/groups", group_routes())
        .nest("/chats", chat_routes())
        .nest("/messages", message_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::user::create_user).get(handlers::user::get_users),
        )
        .route(
            "/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/{id}/friends", get(handlers::user::get_user_friends))
}

fn group_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::group::create_group)
                .get(handlers::group::get_groups)
                .delete(handlers::group::delete_groups),
        )
        .route(
            "/{id}",
            get(handlers::group::get_group)
                .put(handlers::group::update_group)
                .delete(handlers::group::delete_group),
        )
        .route("/{id}/members", get(handlers::group::get_group_members))
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::chat::create_chat)
                .get(handlers::chat::get_chats)
                .delete(handlers::chat::delete_chats),
        )
        .route(
            "/{id}",
            get(handlers::chat::get_chat)
                .put(handlers::chat::update_chat)
                .delete(handlers::chat::delete_chat),
        )
        .route(
            "/{id}/messages",
            get(handlers::chat::get_chat_messages).post(handlers::chat::send_chat_message),
        )
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::message::create_message)
                .get(handlers::message::get_messages)
                .delete(handlers::message::delete_messages),
        )
        .route(
            "/{id}",
            get(handlers::message::get_message)
                .put(handlers::message::update_message)
                .delete(handlers::message::delete_message),
        )
}
