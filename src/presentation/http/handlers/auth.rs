//! Authentication Handlers

use axum::extract::State;

use crate::application::dto::{ApiResponse, ApiResponseDoc, LoginRequest, SignupRequest};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::hypermedia::{get_hyperlinks, Action, Resource};
use crate::startup::AppState;

/// Log in with email and password; `data` is the access token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User logged in", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Invalid Email or Invalid Password", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<String>, AppError> {
    let token = state.services.auth.login(body).await?;

    Ok(ApiResponse::ok("User logged in successfully", token)
        .with_links(get_hyperlinks(Resource::Auth, Action::Login)))
}

/// Create an account; `data` is the access token
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponseDoc),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SignupRequest>,
) -> Result<ApiResponse<String>, AppError> {
    let token = state.services.auth.signup(body).await?;

    Ok(ApiResponse::created("User created successfully", token)
        .with_links(get_hyperlinks(Resource::Auth, Action::Signup)))
}
