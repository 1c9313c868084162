//! Chats domain state

use crate::service::ChatService;

/// Application state for the Chats domain
#[derive(Clone)]
pub struct ChatsState {
    pub service: ChatService,
}

impl ChatsState {
    pub fn new(service: ChatService) -> Self {
        Self { service }
    }
}
