//! Chat Gateway Port - Interface to the messaging platform.
//!
//! Handlers talk to Telegram only through this port: send a reply, edit a
//! message, delete a message. All outgoing text is Telegram HTML.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{MessageHandle, Reply};

/// Port for outbound chat operations.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends `reply` in the chat of `reply_to`, addressed to that message.
    ///
    /// Returns the handle of the newly sent message.
    async fn send_reply(&self, reply_to: MessageHandle, reply: Reply)
        -> Result<MessageHandle, ChatError>;

    /// Replaces the text of an existing message.
    async fn edit_message(&self, message: MessageHandle, html: &str) -> Result<(), ChatError>;

    /// Deletes a message.
    async fn delete_message(&self, message: MessageHandle) -> Result<(), ChatError>;
}

/// Chat operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The platform rejected or failed the request.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The target message does not exist (never sent or already deleted).
    #[error("message {0} not found")]
    MessageNotFound(MessageHandle),

    /// A keyboard button carried a URL the platform cannot accept.
    #[error("invalid button url: {0}")]
    InvalidButtonUrl(String),
}

impl ChatError {
    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }
}
