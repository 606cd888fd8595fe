//! HTTP API
//!
//! Routes, handlers, extractors and the OpenAPI document.

pub mod docs;
pub mod extractors;
pub mod handlers;
pub mod routes;
