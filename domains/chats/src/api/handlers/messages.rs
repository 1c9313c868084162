//! Message API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chatline_common::{Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::parse_chat_id;
use crate::api::middleware::ChatsState;
use crate::domain::entities::Message;

/// Request for posting a message
// No field rules here; `validate()` is a no-op and the service owns validation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    /// Message text
    pub text: String,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            chat_id: m.chat_id,
            text: m.text,
            created_at: m.created_at,
        }
    }
}

/// Post a message to a chat
pub async fn create_message(
    State(state): State<ChatsState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let chat_id = parse_chat_id(&id)?;
    let message = state.service.create_message(chat_id, &req.text).await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}
