//! Routes chat messages: `/start`, `/launch`, and `Name|Symbol|Supply` launches.

use std::sync::Arc;

use apebot_core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use launch_client::{parse_launch_request, LaunchOutcome, TokenLauncher};
use tracing::{error, info, instrument, warn};

use crate::reply::{self, render_outcome};
use crate::router::{route, Route};

/// Stateless; each message is handled on its own. Bot and launcher are shared for the process lifetime.
pub struct LaunchpadHandler {
    bot: Arc<dyn Bot>,
    launcher: Arc<dyn TokenLauncher>,
    /// Own @username; commands addressed to other bots are ignored. None accepts any.
    bot_username: Option<String>,
}

impl LaunchpadHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        launcher: Arc<dyn TokenLauncher>,
        bot_username: Option<String>,
    ) -> Self {
        Self {
            bot,
            launcher,
            bot_username,
        }
    }

    /// Parse, announce, submit. Never fails: every path ends in an outcome to render.
    async fn launch(&self, chat: &Chat, text: &str) -> LaunchOutcome {
        let request = match parse_launch_request(text) {
            Ok(request) => request,
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Rejected launch command");
                return LaunchOutcome::ValidationError(e);
            }
        };

        info!(
            chat_id = chat.id,
            name = %request.name(),
            symbol = %request.symbol(),
            supply = %request.supply_text(),
            "Launching token"
        );

        // The progress note is best effort; the launch goes ahead without it.
        if let Err(e) = self.bot.send_message(chat, reply::LAUNCHING_TEXT).await {
            warn!(chat_id = chat.id, error = %e, "Failed to send progress message");
        }

        match self.launcher.launch(&request).await {
            Ok(result) => {
                info!(
                    chat_id = chat.id,
                    token_address = %result.token_address(),
                    tx_hash = %result.transaction_hash(),
                    "Token launched"
                );
                LaunchOutcome::Success { request, result }
            }
            Err(e) => {
                error!(chat_id = chat.id, symbol = %request.symbol(), error = %e, "Launch failed");
                LaunchOutcome::SubmissionError(e)
            }
        }
    }
}

#[async_trait]
impl Handler for LaunchpadHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Continue);
        }

        let reply = match route(&message.content, self.bot_username.as_deref()) {
            Route::Start => reply::WELCOME_TEXT.to_string(),
            Route::Usage => reply::USAGE_TEXT.to_string(),
            Route::Launch(text) => render_outcome(&self.launch(&message.chat, text).await),
            Route::Ignore => return Ok(HandlerResponse::Continue),
        };

        if let Err(e) = self.bot.send_html(&message.chat, &reply).await {
            error!(error = %e, "Failed to send reply");
            return Err(e);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
