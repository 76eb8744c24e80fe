//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; apebot-telegram implements it over teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message rendered with HTML markup (`<b>`, `<code>`, ...). Callers escape user-supplied text.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;
}
