//! Adapters from Telegram (teloxide) types to apebot_core types.

use apebot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_TEXT};

/// Message type recorded for updates without text (stickers, photos, joins, ...).
const MESSAGE_TYPE_OTHER: &str = "other";

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let text = self.0.text();
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: text.unwrap_or("").to_string(),
            message_type: if text.is_some() {
                MESSAGE_TYPE_TEXT
            } else {
                MESSAGE_TYPE_OTHER
            }
            .to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}
