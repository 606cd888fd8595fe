//! Application Error Types
//!
//! Centralized error handling with Axum integration. `AppError` is the only
//! place where failures are turned into HTTP responses: handlers and services
//! propagate it with `?` and the `IntoResponse` impl below picks the status
//! code and the `{statusCode, error, message}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgDatabaseError;
use utoipa::ToSchema;

/// Message returned for malformed identifiers.
pub const INVALID_ID_MESSAGE: &str = "ID should be a valid UUID";

/// Message returned for unexpected failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = 404)]
    pub status_code: u16,
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = json!(["Chat with ID 3f1c2d9e-8a4b-4f6e-9d2a-1b7c5e8f0a12 not found"]))]
    pub message: Vec<String>,
}

/// How a database failure is reported to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseFailure {
    /// Unique constraint violation (SQLSTATE 23505).
    Duplicate(String),
    /// NOT NULL or CHECK violation (SQLSTATE 23502 / 23514).
    Constraint(String),
    /// Value could not be cast to the column type (SQLSTATE 22P02).
    Cast,
    /// Any other data exception (SQLSTATE class 22), e.g. a NUL byte in text.
    InvalidData(String),
    /// Anything else.
    Unknown,
}

impl AppError {
    /// Shorthand for a validation error with a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    fn parts(&self) -> (StatusCode, &'static str, Vec<String>) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", vec![msg.clone()]),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad Request", vec![msg.clone()])
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", vec![msg.clone()])
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", vec![msg.clone()]),
            AppError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, "Bad Request", messages.clone())
            }
            AppError::InvalidId(raw) => {
                tracing::warn!(id = %raw, "Cast error");
                (
                    StatusCode::BAD_REQUEST,
                    "Bad Request",
                    vec![INVALID_ID_MESSAGE.to_string()],
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_parts()
            }
            AppError::Database(e) => match classify_database_error(e) {
                DatabaseFailure::Duplicate(msg) => (StatusCode::CONFLICT, "Conflict", vec![msg]),
                DatabaseFailure::Constraint(msg) => {
                    (StatusCode::BAD_REQUEST, "Validation Error", vec![msg])
                }
                DatabaseFailure::Cast => {
                    tracing::warn!("Cast error: {}", e);
                    (
                        StatusCode::BAD_REQUEST,
                        "Bad Request",
                        vec![INVALID_ID_MESSAGE.to_string()],
                    )
                }
                DatabaseFailure::InvalidData(msg) => {
                    tracing::warn!("Data exception: {}", e);
                    (StatusCode::BAD_REQUEST, "Bad Request", vec![msg])
                }
                DatabaseFailure::Unknown => {
                    tracing::error!(error = ?e, "Database error");
                    internal_parts()
                }
            },
        }
    }
}

fn internal_parts() -> (StatusCode, &'static str, Vec<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        vec![UNEXPECTED_ERROR_MESSAGE.to_string()],
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = self.parts();

        let body = ErrorResponse {
            status_code: status.as_u16(),
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Classify a sqlx error by its PostgreSQL SQLSTATE.
pub fn classify_database_error(err: &sqlx::Error) -> DatabaseFailure {
    match err {
        sqlx::Error::Database(db_err) => {
            let detail = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|pg| pg.detail());
            classify_sqlstate(
                db_err.code().as_deref(),
                detail,
                db_err.message(),
                db_err.constraint(),
            )
        }
        _ => DatabaseFailure::Unknown,
    }
}

/// Map a SQLSTATE plus the server's detail text to a failure class.
pub fn classify_sqlstate(
    code: Option<&str>,
    detail: Option<&str>,
    message: &str,
    constraint: Option<&str>,
) -> DatabaseFailure {
    match code {
        Some("23505") => DatabaseFailure::Duplicate(duplicate_key_message(detail, constraint)),
        Some("23502") | Some("23514") => DatabaseFailure::Constraint(message.to_string()),
        Some("22P02") => DatabaseFailure::Cast,
        Some(code) if code.starts_with("22") => DatabaseFailure::InvalidData(message.to_string()),
        _ => DatabaseFailure::Unknown,
    }
}

/// Build `"<field> with value <value> already exists"` from a unique violation.
///
/// PostgreSQL reports the offending key as `Key (username)=(a) already exists.`
/// When the detail is missing the field is recovered from the constraint name
/// (`users_username_key`).
pub fn duplicate_key_message(detail: Option<&str>, constraint: Option<&str>) -> String {
    if let Some((field, value)) = detail.and_then(parse_key_detail) {
        return format!("{} with value {} already exists", field, value);
    }

    match constraint {
        Some(name) => format!("{} already exists", field_from_constraint(name)),
        None => "Duplicate value already exists".to_string(),
    }
}

fn parse_key_detail(detail: &str) -> Option<(&str, &str)> {
    let rest = detail.strip_prefix("Key (")?;
    let (field, rest) = rest.split_once(")=(")?;
    let (value, _) = rest.rsplit_once(") already exists")?;
    Some((field, value))
}

fn field_from_constraint(name: &str) -> &str {
    name.strip_suffix("_key")
        .and_then(|s| s.split_once('_'))
        .map(|(_, field)| field)
        .unwrap_or(name)
}
