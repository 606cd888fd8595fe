//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: signup, login, JWT verification
//! - **UserService**: user CRUD and friends lookup
//! - **GroupService**: group CRUD and members lookup
//! - **ChatService**: chat CRUD and the chat message timeline
//! - **MessageService**: message CRUD

pub mod auth_service;
pub mod chat_service;
pub mod group_service;
pub mod message_service;
pub mod user_service;

use std::sync::Arc;

use crate::config::JwtSettings;
use crate::domain::{ChatRepository, GroupRepository, MessageRepository, UserRepository};

pub use auth_service::{sign_token, AuthError, AuthService, AuthServiceImpl, Claims};
pub use chat_service::{ChatError, ChatService, ChatServiceImpl};
pub use group_service::{GroupError, GroupService, GroupServiceImpl};
pub use message_service::{MessageError, MessageService, MessageServiceImpl};
pub use user_service::{UserError, UserService, UserServiceImpl};

/// Every service the HTTP layer needs, behind trait objects.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub groups: Arc<dyn GroupService>,
    pub chats: Arc<dyn ChatService>,
    pub messages: Arc<dyn MessageService>,
}

impl Services {
    /// Wire the services over one set of repositories.
    pub fn new<U, G, C, M>(
        user_repo: Arc<U>,
        group_repo: Arc<G>,
        chat_repo: Arc<C>,
        message_repo: Arc<M>,
        jwt_settings: JwtSettings,
    ) -> Self
    where
        U: UserRepository + 'static,
        G: GroupRepository + 'static,
        C: ChatRepository + 'static,
        M: MessageRepository + 'static,
    {
        Self {
            auth: Arc::new(AuthServiceImpl::new(user_repo.clone(), jwt_settings)),
            users: Arc::new(UserServiceImpl::new(user_repo.clone())),
            groups: Arc::new(GroupServiceImpl::new(group_repo, user_repo)),
            chats: Arc::new(ChatServiceImpl::new(chat_repo, message_repo.clone())),
            messages: Arc::new(MessageServiceImpl::new(message_repo)),
        }
    }
}
