//! Chat repository (Postgres)

use async_trait::async_trait;
use chatline_common::RepositoryError;
use sqlx::PgPool;

use super::ChatRepository;
use crate::domain::entities::{Chat, NewChat};

#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn create(&self, chat: &NewChat) -> Result<Chat, RepositoryError> {
        let created = sqlx::query_as::<_, Chat>(
            r#"
            INSERT INTO chats (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
        )
        .bind(chat.title())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Messages go with the chat through `ON DELETE CASCADE`
    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM chats WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        let chat = sqlx::query_as::<_, Chat>(
            r#"
            SELECT id, title, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chat)
    }
}
