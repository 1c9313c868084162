//! Chats domain: chats, messages, and the service that guards them

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Chat, ChatWithMessages, Message, NewChat, NewMessage};

// Re-export repository types
pub use repository::{
    ChatRepository, ChatsRepositories, InMemoryStore, MessageRepository, PgChatRepository,
    PgMessageRepository,
};

// Re-export the service
pub use service::ChatService;

// Re-export API types
pub use api::routes;
pub use api::ChatsState;
