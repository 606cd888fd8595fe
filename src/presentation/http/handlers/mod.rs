//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Each resource handler returns an
//! `ApiResponse` envelope or an `AppError`.

pub mod auth;
pub mod chat;
pub mod group;
pub mod health;
pub mod message;
pub mod user;
