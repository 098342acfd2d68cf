//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the handlers and the outside world. Adapters implement these ports.
//!
//! - `ChatGateway` - Send, edit and delete chat messages
//! - `CompletionProvider` - One-shot AI completion calls

mod chat_gateway;
mod completion_provider;

pub use chat_gateway::{ChatError, ChatGateway};
pub use completion_provider::{
    CompletionProvider, CompletionRequest, Message, MessageRole, ProviderInfo,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};
