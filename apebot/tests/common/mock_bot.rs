//! Recording implementation of [`apebot_core::Bot`] for integration tests.
//!
//! Every send is appended to an in-memory log so tests can assert on what went to the chat, and in what order.

use std::sync::{Arc, Mutex};

use apebot_core::{Bot, BotError, Chat, Result};
use async_trait::async_trait;

/// One recorded send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Plain { chat_id: i64, text: String },
    Html { chat_id: i64, text: String },
}

impl Sent {
    pub fn text(&self) -> &str {
        match self {
            Sent::Plain { text, .. } | Sent::Html { text, .. } => text,
        }
    }
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
    fail_html: bool,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A bot whose HTML sends fail (plain sends still succeed).
    #[allow(dead_code)]
    pub fn failing_html() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_html: true,
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Plain {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        if self.fail_html {
            return Err(BotError::Bot("chat not found".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Html {
            chat_id: chat.id,
            text: html.to_string(),
        });
        Ok(())
    }
}
