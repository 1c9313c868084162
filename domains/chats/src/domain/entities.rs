//! Domain entities for the Chats domain
//!
//! Persisted entities (`Chat`, `Message`) carry storage-assigned ids and
//! timestamps. The `New*` values are what callers hand to repositories; their
//! constructors trim and validate input, so holding one means the content is
//! already acceptable for persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatline_common::{Error, Result};

/// Maximum chat title length in characters (varchar(200))
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum message text length in characters (varchar(5000))
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Page size used when the caller does not ask for a usable limit
pub const DEFAULT_MESSAGE_LIMIT: i64 = 20;

/// Upper bound on messages returned with a chat
pub const MAX_MESSAGE_LIMIT: i64 = 100;

/// Chat entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A chat together with its most recent messages, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatWithMessages {
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// A chat that has passed validation but has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    title: String,
}

impl NewChat {
    /// Trim and validate a chat title
    pub fn new(title: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidArgument("title cannot be empty".to_string()));
        }
        if title.contains('\0') {
            return Err(Error::InvalidArgument(
                "title cannot contain NUL characters".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "title must be 1-{} characters",
                MAX_TITLE_LENGTH
            )));
        }

        Ok(Self {
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A message that has passed validation but has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    chat_id: i64,
    text: String,
}

impl NewMessage {
    /// Trim and validate message text.
    ///
    /// Does not check that `chat_id` refers to an existing chat.
    pub fn new(chat_id: i64, text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidArgument("text cannot be empty".to_string()));
        }
        if text.contains('\0') {
            return Err(Error::InvalidArgument(
                "text cannot contain NUL characters".to_string(),
            ));
        }
        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "text must be 1-{} characters",
                MAX_TEXT_LENGTH
            )));
        }

        Ok(Self {
            chat_id,
            text: text.to_string(),
        })
    }

    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Clamp a requested message limit into `1..=MAX_MESSAGE_LIMIT`.
///
/// Non-positive requests mean "use the default" rather than "return nothing".
pub fn normalize_limit(limit: i64) -> i64 {
    if limit <= 0 {
        DEFAULT_MESSAGE_LIMIT
    } else {
        limit.min(MAX_MESSAGE_LIMIT)
    }
}
