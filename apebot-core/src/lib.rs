//! # apebot-core
//!
//! Core types and traits for the launchpad bot: [`Bot`], [`Handler`], chat message and user types,
//! and tracing initialization. Transport-agnostic; used by apebot-telegram, handler-chain and apebot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_TEXT,
};
