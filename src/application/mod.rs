//! Application layer - Command handlers.
//!
//! This layer orchestrates the domain and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AskAiConfig, AskAiHandler, AskAiResult, HelpHandler, Pacing, StartHandler,
};
