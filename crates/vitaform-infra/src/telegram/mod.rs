//! Telegram Bot API delivery.

pub mod submitter;
pub mod types;

pub use submitter::{TelegramConfig, TelegramSubmitter};
