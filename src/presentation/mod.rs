//! Presentation Layer
//!
//! HTTP routes, handlers and middleware.

pub mod http;
pub mod middleware;
