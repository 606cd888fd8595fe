//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits. Each
//! repository owns a clone of the shared `PgPool`.
//!
//! ```rust,ignore
//! let users = PgUserRepository::new(pool.clone());
//! let chats = PgChatRepository::new(pool.clone());
//! ```

pub mod chat_repository;
pub mod group_repository;
pub mod message_repository;
pub mod user_repository;

pub use chat_repository::PgChatRepository;
pub use group_repository::PgGroupRepository;
pub use message_repository::PgMessageRepository;
pub use user_repository::PgUserRepository;
