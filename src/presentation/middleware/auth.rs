//! Authentication Middleware
//!
//! JWT validation middleware for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};

use crate::presentation::http::extractors::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected request: {}", e);
        AppError::Unauthorized("Missing authorization header".into())
    })?;

    let claims = state.services.auth.verify_token(bearer.token()).map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected token: {}", e);
        AppError::from(e)
    })?;

    let user_id = claims.user_id()?;

    // Insert authenticated user into request extensions
    request.extensions_mut().insert(AuthUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}
