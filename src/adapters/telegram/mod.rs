//! Telegram Adapters.
//!
//! - `TelegramGateway` - ChatGateway over the teloxide Bot API client
//! - `InMemoryChatGateway` - Recording gateway for tests
//! - `dispatch` - Command enum and dispatcher schema

pub mod dispatch;
mod gateway;
mod in_memory_gateway;

pub use dispatch::{schema, BotServices, Command};
pub use gateway::TelegramGateway;
pub use in_memory_gateway::{ChatEvent, InMemoryChatGateway};
