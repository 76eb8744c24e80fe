//! Minimal Telegram config: token, optional API URL and log file path.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::Result;
use std::env;

/// Default log file when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/apebot.log";

/// Telegram connectivity and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; one of them is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Checks that telegram_api_url, when set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = TelegramConfig::from_env(None).unwrap();

        assert_eq!(config.bot_token, "env_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_token_override_and_teloxide_url() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/apebot-test.log");

        let config = TelegramConfig::from_env(Some("cli_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "cli_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/apebot-test.log");
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token_fails() {
        clear_env();
        let err = TelegramConfig::from_env(None).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_validate_invalid_url() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        let config = TelegramConfig::from_env(None).unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
