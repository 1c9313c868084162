//! Route definitions for Chats domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chats, messages};
use super::middleware::ChatsState;

/// Create chat routes
fn chat_routes() -> Router<ChatsState> {
    Router::new()
        .route("/chats", post(chats::create_chat))
        .route("/chats/", post(chats::create_chat))
        .route(
            "/chats/{id}",
            get(chats::get_chat).delete(chats::delete_chat),
        )
}

/// Create message routes
fn message_routes() -> Router<ChatsState> {
    Router::new()
        .route("/chats/{id}/messages", post(messages::create_message))
        .route("/chats/{id}/messages/", post(messages::create_message))
}

/// Create all Chats domain API routes
pub fn routes() -> Router<ChatsState> {
    Router::new().merge(chat_routes()).merge(message_routes())
}
