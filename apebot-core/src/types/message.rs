//! Inbound message type for the core model.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// Message type for updates that carry text.
pub const MESSAGE_TYPE_TEXT: &str = "text";

/// A single inbound message with user, chat and content. `content` is empty for non-text updates.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// `"text"` for text messages; otherwise the transport's kind (e.g. `"other"`).
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the update carried text.
    pub fn is_text(&self) -> bool {
        self.message_type == MESSAGE_TYPE_TEXT
    }
}
