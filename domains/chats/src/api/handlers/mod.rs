//! HTTP handlers for the Chats domain

pub mod chats;
pub mod messages;

use chatline_common::{Error, Result};

/// Parse the `{id}` path segment, rejecting anything that is not an integer
pub(crate) fn parse_chat_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::InvalidArgument("invalid chat id".to_string()))
}
