//! # Messenger API
//!
//! REST backend for a messenger: users, groups, chats and messages.
//!
//! - JWT bearer authentication with signup and login
//! - PostgreSQL storage through `sqlx`
//! - Uniform success and error envelopes with hypermedia links
//! - OpenAPI document and Swagger UI at `/docs`
//!
//! ## Module Structure
//!
//! ```text
//! messenger_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Errors, validation, hypermedia, passwords
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
