//! Wraps teloxide::Bot and implements [`apebot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use apebot_core::{Bot as CoreBot, BotError, Chat, Result};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates a bot for `token`, pointed at `api_url` when given (e.g. a mock server in tests).
    pub fn with_api_url(token: &str, api_url: Option<&str>) -> Result<Self> {
        let bot = teloxide::Bot::new(token);
        let bot = match api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .map_err(|e| BotError::Config(format!("invalid Telegram API URL {}: {}", url, e)))?;
                bot.set_api_url(url)
            }
            None => bot,
        };
        Ok(Self { bot })
    }

    /// The bot's own @username (without `@`), from getMe.
    pub async fn username(&self) -> Result<Option<String>> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(me.user.username)
    }

    /// Returns the underlying teloxide::Bot for the REPL.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
