//! Shared test helpers: recording Bot and message builders.

pub mod mock_bot;

use apebot_core::{Chat, Message, User, MESSAGE_TYPE_TEXT};
use chrono::Utc;

pub const CHAT_ID: i64 = 777;

/// A private-chat text message from user 42.
pub fn text_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 42,
            username: Some("ape".to_string()),
            first_name: Some("Ape".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: MESSAGE_TYPE_TEXT.to_string(),
        created_at: Utc::now(),
    }
}

/// A non-text update (photo, sticker, ...): empty content.
#[allow(dead_code)]
pub fn non_text_message() -> Message {
    let mut message = text_message("");
    message.message_type = "other".to_string();
    message
}
