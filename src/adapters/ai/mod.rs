//! AI Provider Adapters.
//!
//! Implementations of the CompletionProvider port.
//!
//! ## Available Adapters
//!
//! - `ChatCompletionsProvider` - OpenAI-compatible `chat/completions` endpoint
//! - `MockCompletionProvider` - Scripted provider for testing

mod chat_completions_provider;
mod mock_provider;

pub use chat_completions_provider::{
    interpret_body, ChatCompletionsConfig, ChatCompletionsProvider, DEFAULT_MODEL,
};
pub use mock_provider::MockCompletionProvider;
