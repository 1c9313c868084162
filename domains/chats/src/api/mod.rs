//! API layer for the Chats domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ChatsState;
pub use routes::routes;
