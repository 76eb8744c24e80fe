//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use apebot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
///
/// Each update is converted to core::Message and handled in its own spawned task, so a slow launch
/// (waiting for a receipt) never blocks other chats and a failing one never affects them.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    info!("Starting long polling");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %text,
                    "Update received"
                ),
                None => debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Non-text update received"
                ),
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
