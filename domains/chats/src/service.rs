//! Chat service
//!
//! Sits between the HTTP handlers and the repositories. Validates input,
//! normalizes the message limit, checks that referenced chats exist, and maps
//! repository outcomes onto domain errors. Holds no state of its own beyond
//! the shared repository handles, and never retries or swallows storage
//! failures.

use chatline_common::{Error, RepositoryError, Result};

use crate::domain::entities::{
    normalize_limit, Chat, ChatWithMessages, Message, NewChat, NewMessage,
};
use crate::repository::ChatsRepositories;

const CHAT_NOT_FOUND: &str = "chat not found";

/// Service orchestrating chat and message operations
#[derive(Clone)]
pub struct ChatService {
    repos: ChatsRepositories,
}

impl ChatService {
    pub fn new(repos: ChatsRepositories) -> Self {
        Self { repos }
    }

    /// Create a chat from a raw title.
    ///
    /// The title is trimmed; an empty result or one longer than 200
    /// characters is rejected before anything reaches storage.
    pub async fn create_chat(&self, title: &str) -> Result<Chat> {
        let new_chat = NewChat::new(title)?;
        let chat = self.repos.chats.create(&new_chat).await?;

        tracing::info!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    /// Fetch a chat with up to `limit` of its newest messages.
    ///
    /// `limit <= 0` means the default of 20; anything above 100 is clamped.
    pub async fn get_chat_with_messages(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<ChatWithMessages> {
        let effective_limit = normalize_limit(limit);
        if effective_limit != limit {
            tracing::debug!(
                chat_id,
                requested = limit,
                effective = effective_limit,
                "Message limit normalized"
            );
        }

        let chat = self
            .repos
            .chats
            .get_by_id(chat_id)
            .await?
            .ok_or_else(chat_not_found)?;

        let messages = self
            .repos
            .messages
            .get_by_chat_id(chat_id, effective_limit)
            .await?;

        Ok(ChatWithMessages { chat, messages })
    }

    /// Delete a chat and, through storage, all of its messages
    pub async fn delete_chat(&self, chat_id: i64) -> Result<()> {
        self.repos
            .chats
            .delete(chat_id)
            .await
            .map_err(not_found_as_chat)?;

        tracing::info!(chat_id, "Chat deleted");
        Ok(())
    }

    /// Post a message to an existing chat.
    ///
    /// Existence is checked before the text is validated, so a missing chat
    /// always reports `NotFound` whatever the text looks like.
    pub async fn create_message(&self, chat_id: i64, text: &str) -> Result<Message> {
        if !self.repos.chats.exists(chat_id).await? {
            return Err(chat_not_found());
        }

        let new_message = NewMessage::new(chat_id, text)?;
        let message = self
            .repos
            .messages
            .create(&new_message)
            .await
            .map_err(not_found_as_chat)?;

        tracing::info!(chat_id, message_id = message.id, "Message created");
        Ok(message)
    }
}

fn chat_not_found() -> Error {
    Error::NotFound(CHAT_NOT_FOUND.to_string())
}

fn not_found_as_chat(err: RepositoryError) -> Error {
    match err {
        RepositoryError::NotFound => chat_not_found(),
        other => other.into(),
    }
}
