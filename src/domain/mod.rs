//! Domain layer containing the bot's pure logic and value types.
//!
//! # Module Organization
//!
//! - `chat` - Message handles, outgoing replies and inline keyboards
//! - `completion` - Tagged outcome of a completion call
//! - `formatting` - Model markup to Telegram HTML
//! - `query` - Query extraction from an `/ai` invocation
//! - `replies` - Fixed reply texts and premium emoji

pub mod chat;
pub mod completion;
pub mod formatting;
pub mod query;
pub mod replies;

pub use chat::{LinkButton, MessageHandle, Reply, ReplyMarkup};
pub use completion::CompletionOutcome;
pub use formatting::{escape_html, format_ai_response};
pub use query::{Invocation, Query, QuerySource, ReferencedMessage};
pub use replies::{HelpLinks, PremiumEmoji};
