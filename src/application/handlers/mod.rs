//! Application handlers.
//!
//! One handler per bot command. Handlers depend only on ports.

pub mod ask_ai;
pub mod help;
pub mod start;

pub use ask_ai::{AskAiConfig, AskAiHandler, AskAiResult, Pacing};
pub use help::HelpHandler;
pub use start::StartHandler;
