//! Bot config: Telegram connectivity plus launcher (RPC, key, contract). Both halves load from env.

use anyhow::Result;
use apebot_telegram::TelegramConfig;
use launch_client::LauncherConfig;

/// Everything the bot needs at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub launcher: LauncherConfig,
}

impl BotConfig {
    /// Loads both halves from env. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            launcher: LauncherConfig::from_env()?,
        })
    }

    /// Rejects config that would only fail later: bad API URL, zero confirmations, zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.launcher.confirmations == 0 {
            anyhow::bail!("CONFIRMATIONS must be at least 1");
        }
        if self.launcher.confirmation_timeout_secs == Some(0) {
            anyhow::bail!("CONFIRMATION_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
