//! Repository contracts and implementations for the Chats domain
//!
//! The service depends only on the [`ChatRepository`] and
//! [`MessageRepository`] traits. Postgres backs them in production; the
//! in-memory store backs them in tests and local experiments.

pub mod chats;
pub mod memory;
pub mod messages;

use std::sync::Arc;

use async_trait::async_trait;
use chatline_common::RepositoryError;
use sqlx::PgPool;

use crate::domain::entities::{Chat, Message, NewChat, NewMessage};

pub use chats::PgChatRepository;
pub use memory::InMemoryStore;
pub use messages::PgMessageRepository;

/// Persistence contract for chats
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Store a new chat and return it with its id and creation time.
    async fn create(&self, chat: &NewChat) -> Result<Chat, RepositoryError>;

    /// Delete a chat together with all of its messages.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no chat has this id
    /// - `Database`/`Storage` on persistence failure
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Whether a chat with this id is currently stored.
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Find a chat by id.
    ///
    /// Returns `None` if not found; the error channel is reserved for failures.
    async fn get_by_id(&self, id: i64) -> Result<Option<Chat>, RepositoryError>;
}

/// Persistence contract for messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a new message and return it with its id and creation time.
    ///
    /// Callers are expected to have checked that the chat exists. If the chat
    /// disappears before the insert lands, `NotFound` is returned.
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError>;

    /// Up to `limit` messages of a chat, newest first.
    ///
    /// An unknown chat yields an empty list, not an error.
    async fn get_by_chat_id(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepositoryError>;
}

/// Combined repository access for the Chats domain
#[derive(Clone)]
pub struct ChatsRepositories {
    pub chats: Arc<dyn ChatRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl ChatsRepositories {
    pub fn new(chats: Arc<dyn ChatRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { chats, messages }
    }

    /// Postgres-backed repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            chats: Arc::new(PgChatRepository::new(pool.clone())),
            messages: Arc::new(PgMessageRepository::new(pool)),
        }
    }

    /// Both contracts served by the same in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            chats: store.clone(),
            messages: store,
        }
    }
}
