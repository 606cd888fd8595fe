//! # Domain Layer
//!
//! Entities of the messenger and the repository traits that define how they
//! are stored. Nothing in here depends on the HTTP or database layers.

pub mod entities;

pub use entities::*;
