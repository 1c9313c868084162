//! Chat management API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chatline_common::{LimitQuery, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::messages::MessageResponse;
use super::parse_chat_id;
use crate::api::middleware::ChatsState;
use crate::domain::entities::{Chat, ChatWithMessages};

/// Request for creating a chat
///
/// Title rules (trimming, length) are enforced by the service.
// No field rules here; `validate()` is a no-op and the service owns validation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatRequest {
    pub title: String,
}

/// Chat response DTO
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(c: Chat) -> Self {
        Self {
            id: c.id,
            title: c.title,
            created_at: c.created_at,
        }
    }
}

/// Chat with its most recent messages
#[derive(Debug, Serialize)]
pub struct ChatWithMessagesResponse {
    pub chat: ChatResponse,
    pub messages: Vec<MessageResponse>,
}

impl From<ChatWithMessages> for ChatWithMessagesResponse {
    fn from(view: ChatWithMessages) -> Self {
        Self {
            chat: view.chat.into(),
            messages: view.messages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create a new chat
pub async fn create_chat(
    State(state): State<ChatsState>,
    ValidatedJson(req): ValidatedJson<CreateChatRequest>,
) -> Result<(StatusCode, Json<ChatResponse>)> {
    let chat = state.service.create_chat(&req.title).await?;
    Ok((StatusCode::CREATED, Json(chat.into())))
}

/// Get a chat with its newest messages (`?limit=`, default 20, max 100)
pub async fn get_chat(
    State(state): State<ChatsState>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ChatWithMessagesResponse>> {
    let chat_id = parse_chat_id(&id)?;
    let view = state
        .service
        .get_chat_with_messages(chat_id, query.requested())
        .await?;

    Ok(Json(view.into()))
}

/// Delete a chat and all of its messages
pub async fn delete_chat(
    State(state): State<ChatsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let chat_id = parse_chat_id(&id)?;
    state.service.delete_chat(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
