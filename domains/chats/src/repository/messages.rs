//! Message repository (Postgres)

use async_trait::async_trait;
use chatline_common::RepositoryError;
use sqlx::PgPool;

use super::MessageRepository;
use crate::domain::entities::{Message, NewMessage};

#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (chat_id, text)
            VALUES ($1, $2)
            RETURNING id, chat_id, text, created_at
            "#,
        )
        .bind(message.chat_id())
        .bind(message.text())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The chat was deleted between the existence check and the insert
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                RepositoryError::NotFound
            }
            other => RepositoryError::Database(other),
        })?;

        Ok(created)
    }

    /// Ties on `created_at` fall back to insertion order via `id`
    async fn get_by_chat_id(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, chat_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
