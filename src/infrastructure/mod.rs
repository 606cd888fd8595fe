//! Infrastructure Layer
//!
//! Implementations for external concerns:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations of the domain traits
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
