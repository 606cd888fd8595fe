//! Application Layer
//!
//! Services holding the business rules and the DTOs exchanged with the
//! presentation layer.

pub mod dto;
pub mod services;
