//! Chatline application composition root
//!
//! Wires the storage adapter, the chat service, and the domain router into a
//! single application.

use axum::{extract::DefaultBodyLimit, Router};
use chatline_chats::{ChatService, ChatsRepositories, ChatsState};
use chatline_common::Config;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Request bodies above this size are rejected before JSON decoding
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes
pub fn create_app(service: ChatService) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Chatline API v", env!("CARGO_PKG_VERSION")) }),
        )
        .merge(chatline_chats::routes().with_state(ChatsState::new(service)))
        .layer(body_limit_layer())
}

/// Chat service backed by Postgres
pub fn postgres_service(pool: PgPool) -> ChatService {
    ChatService::new(ChatsRepositories::postgres(pool))
}

/// Open the connection pool and bring the schema up to date
pub async fn connect(config: &Config) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Database migration failed: {}", e))?;

    Ok(pool)
}

/// Body size limit shared by every route
pub fn body_limit_layer() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
