//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod hypermedia;
pub mod password;
pub mod validation;
