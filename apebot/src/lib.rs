//! # apebot
//!
//! Ape City Launchpad bot. Wires the Telegram layer, handler chain and launch client; loads config from env
//! and runs the REPL. `/start` greets, `/launch` explains the format, and `Name|Symbol|Supply` text launches a token.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod reply;
pub mod router;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use handlers::{LaunchpadHandler, LoggingHandler};
pub use router::{route, Route};
pub use runner::{build_handler_chain, run_bot};
