//! Authentication Service
//!
//! Handles signup, login and JWT issuance/verification.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::dto::{LoginRequest, SignupRequest};
use crate::config::JwtSettings;
use crate::domain::{NewUser, UserRepository};
use crate::shared::error::AppError;
use crate::shared::password::{hash_password_blocking, verify_password_blocking};

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return a signed access token
    async fn signup(&self, request: SignupRequest) -> Result<String, AuthError>;

    /// Authenticate by email and password and return a signed access token
    async fn login(&self, request: LoginRequest) -> Result<String, AuthError>;

    /// Decode and validate an access token
    fn verify_token(&self, token: &str) -> Result<Claims, AuthError>;
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidToken)
    }
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid Email")]
    InvalidEmail,

    #[error("Invalid Password")]
    InvalidPassword,

    #[error("Failed to create user")]
    CreateFailed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error(transparent)]
    Other(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::InvalidEmail
            | AuthError::InvalidPassword
            | AuthError::TokenExpired
            | AuthError::InvalidToken => AppError::Unauthorized(message),
            AuthError::CreateFailed => AppError::NotFound(message),
            AuthError::Other(e) => e,
        }
    }
}

/// Sign an access token for the given user.
pub fn sign_token(settings: &JwtSettings, user_id: Uuid, username: &str) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(settings.expiry_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Other(AppError::Internal(format!("Token generation failed: {}", e))))
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    jwt_settings: JwtSettings,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, jwt_settings: JwtSettings) -> Self {
        Self {
            user_repo,
            jwt_settings,
        }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn signup(&self, request: SignupRequest) -> Result<String, AuthError> {
        let new_user = NewUser {
            username: request.username,
            email: request.email,
            password_hash: hash_password_blocking(request.password).await?,
            first_name: request.first_name,
            last_name: request.last_name,
            avatar: request.avatar,
            ..Default::default()
        };

        // Duplicate username/email surface from the repository as Conflict
        let user = self
            .user_repo
            .create(&new_user)
            .await?
            .ok_or(AuthError::CreateFailed)?;

        tracing::info!(user_id = %user.id, "User signed up");
        sign_token(&self.jwt_settings, user.id, &user.username)
    }

    async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidEmail)?;

        if !verify_password_blocking(request.password, user.password_hash.clone()).await? {
            tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidPassword);
        }

        sign_token(&self.jwt_settings, user.id, &user.username)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}
