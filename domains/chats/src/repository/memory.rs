//! In-memory chat store
//!
//! Implements both repository contracts over a single mutex-guarded pair of
//! tables, so cascade delete is atomic and message inserts see the same
//! foreign-key rule Postgres enforces.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chatline_common::RepositoryError;
use chrono::Utc;

use super::{ChatRepository, MessageRepository};
use crate::domain::entities::{Chat, Message, NewChat, NewMessage};

#[derive(Debug, Default)]
struct Tables {
    chats: BTreeMap<i64, Chat>,
    messages: Vec<Message>,
    last_chat_id: i64,
    last_message_id: i64,
}

/// In-memory implementation of [`ChatRepository`] and [`MessageRepository`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a storage error (or recover)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of messages stored across all chats
    pub fn message_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.messages.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(
                "in-memory store is unavailable".to_string(),
            ));
        }
        self.tables
            .lock()
            .map_err(|_| RepositoryError::Storage("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ChatRepository for InMemoryStore {
    async fn create(&self, chat: &NewChat) -> Result<Chat, RepositoryError> {
        let mut tables = self.lock()?;
        tables.last_chat_id += 1;

        let created = Chat {
            id: tables.last_chat_id,
            title: chat.title().to_string(),
            created_at: Utc::now(),
        };
        tables.chats.insert(created.id, created.clone());

        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.chats.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        tables.messages.retain(|m| m.chat_id != id);

        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.chats.contains_key(&id))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        Ok(self.lock()?.chats.get(&id).cloned())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables.chats.contains_key(&message.chat_id()) {
            return Err(RepositoryError::NotFound);
        }
        tables.last_message_id += 1;

        let created = Message {
            id: tables.last_message_id,
            chat_id: message.chat_id(),
            text: message.text().to_string(),
            created_at: Utc::now(),
        };
        tables.messages.push(created.clone());

        Ok(created)
    }

    async fn get_by_chat_id(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepositoryError> {
        let tables = self.lock()?;
        let mut messages: Vec<Message> = tables
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect();

        messages.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        messages.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(messages)
    }
}
