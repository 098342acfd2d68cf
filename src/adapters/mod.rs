//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the handlers to external systems:
//! - `ai` - Completion endpoint clients
//! - `telegram` - Telegram Bot API gateway and dispatcher wiring

pub mod ai;
pub mod telegram;

pub use ai::{ChatCompletionsConfig, ChatCompletionsProvider, MockCompletionProvider};
pub use telegram::{InMemoryChatGateway, TelegramGateway};
