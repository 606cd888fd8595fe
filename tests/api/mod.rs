//! REST API endpoint tests, one module per resource.

mod auth_tests;
mod chat_tests;
mod group_tests;
mod health_tests;
mod message_tests;
mod postgres_tests;
mod user_tests;
