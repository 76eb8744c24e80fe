//! Startup: validate config, init tracing, build the launcher and Telegram adapter, run the REPL.

use std::sync::Arc;

use anyhow::Result;
use apebot_core::{init_tracing, Bot};
use apebot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use launch_client::{ContractLauncher, TokenLauncher};
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::handlers::{LaunchpadHandler, LoggingHandler};

/// Chain order: LoggingHandler, then LaunchpadHandler.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    launcher: Arc<dyn TokenLauncher>,
    bot_username: Option<String>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(LaunchpadHandler::new(bot, launcher, bot_username)))
}

/// Runs until the REPL exits. Any config, key, address or URL problem fails here, before polling starts.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.telegram.log_file)?;

    let launcher = ContractLauncher::new(&config.launcher)?;
    info!(
        rpc_url = %config.launcher.rpc_url,
        contract_address = %launcher.contract_address(),
        signer_address = %launcher.signer_address(),
        confirmations = config.launcher.confirmations,
        "Launcher ready"
    );

    let adapter = TelegramBotAdapter::with_api_url(
        &config.telegram.bot_token,
        config.telegram.telegram_api_url.as_deref(),
    )?;
    let teloxide_bot = adapter.inner().clone();

    let bot_username = match adapter.username().await {
        Ok(username) => {
            info!(username = %username.as_deref().unwrap_or("unknown"), "Connected to Telegram");
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; commands with any @mention will be answered");
            None
        }
    };

    let handler_chain = build_handler_chain(Arc::new(adapter), Arc::new(launcher), bot_username);

    info!(log_file = %config.telegram.log_file, "Bot started");
    run_repl(teloxide_bot, handler_chain).await
}
